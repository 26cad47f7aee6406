mod auth;
mod company;
mod org;
mod patient;
mod psychologist;
mod triage;

use clap::Args;

pub use auth::{AuthCommands, AuthLoginArgs};
pub use company::CompanyCommands;
pub use org::{OrgCommands, OrgCreateArgs, OrgUpdateArgs};
pub use patient::{PatientCommands, PatientCreateArgs, PatientUpdateArgs};
pub use psychologist::{PsychologistCommands, PsychologistCreateArgs, PsychologistUpdateArgs};
pub use triage::{TriageCommands, TriageCreateArgs, TriageUpdateArgs};

/// Paging, search and sort flags shared by every `list` command.
#[derive(Clone, Debug, Default, Args)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,
    /// Field to sort by, e.g. `createdAt`
    #[arg(long)]
    pub sort_by: Option<String>,
    /// asc or desc
    #[arg(long)]
    pub sort_order: Option<String>,
}
