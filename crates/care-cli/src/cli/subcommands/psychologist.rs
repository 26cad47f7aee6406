use clap::{Args, Subcommand};

use super::ListArgs;

/// Psychologist account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PsychologistCommands {
    /// List psychologists.
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only accounts of this organization
        #[arg(long)]
        organization: Option<String>,
        /// Only active (`true`) or inactive (`false`) accounts
        #[arg(long)]
        active: Option<bool>,
    },
    /// Get a psychologist by ID.
    Get { id: String },
    /// Create a psychologist account.
    Create(PsychologistCreateArgs),
    /// Update a psychologist account.
    Update(PsychologistUpdateArgs),
    /// Delete a psychologist account.
    Delete { id: String },
    /// Reactivate an account.
    Activate { id: String },
    /// Deactivate an account without deleting it.
    Deactivate { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct PsychologistCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Initial password (at least 8 characters)
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub specialization: Option<String>,
    #[arg(long)]
    pub license_number: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Organization ID the account draws a seat from
    #[arg(long)]
    pub organization: Option<String>,
    /// Create the account deactivated
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Clone, Debug, Args)]
pub struct PsychologistUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub specialization: Option<String>,
    #[arg(long)]
    pub license_number: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}
