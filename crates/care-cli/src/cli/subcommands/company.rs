use clap::Subcommand;

/// Company-admin commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CompanyCommands {
    /// Summary counts, seat usage and statistics for the signed-in company.
    Dashboard,
}
