use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, CompanyCommands, OrgCommands, PatientCommands, PsychologistCommands,
    TriageCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Organizations (admin).
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Psychologist accounts (admin).
    Psychologist {
        #[command(subcommand)]
        action: PsychologistCommands,
    },
    /// Company-admin views.
    Company {
        #[command(subcommand)]
        action: CompanyCommands,
    },
    /// Patients of the signed-in psychologist.
    Patient {
        #[command(subcommand)]
        action: PatientCommands,
    },
    /// Triage records and diagnosis matching.
    Triage {
        #[command(subcommand)]
        action: TriageCommands,
    },
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Print the JSON schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type, e.g. `organization`, `triage-draft`.
    pub type_name: String,
}
