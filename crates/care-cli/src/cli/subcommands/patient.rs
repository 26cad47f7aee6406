use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::ListArgs;

/// Patient commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PatientCommands {
    /// List patients.
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Include soft-deleted patients
        #[arg(long)]
        include_deleted: bool,
    },
    /// Get a patient by ID.
    Get { id: String },
    /// Register a patient.
    Create(PatientCreateArgs),
    /// Update a patient.
    Update(PatientUpdateArgs),
    /// Delete a patient (soft delete on the server).
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct PatientCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    pub dob: Option<NaiveDate>,
    #[arg(long)]
    pub gender: Option<String>,
    /// Assigned psychologist ID
    #[arg(long)]
    pub psychologist: Option<String>,
    #[arg(long)]
    pub organization: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PatientUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub dob: Option<NaiveDate>,
    #[arg(long)]
    pub gender: Option<String>,
    /// Reassign to another psychologist
    #[arg(long)]
    pub psychologist: Option<String>,
}
