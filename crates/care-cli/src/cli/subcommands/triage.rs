use clap::{Args, Subcommand};

use super::ListArgs;

/// Triage commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TriageCommands {
    /// List triage records.
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only records for this patient
        #[arg(long)]
        patient: Option<String>,
        /// low, moderate, high or critical
        #[arg(long)]
        severity: Option<String>,
    },
    /// Get a triage record by ID.
    Get { id: String },
    /// Record a triage.
    Create(TriageCreateArgs),
    /// Update a triage record.
    Update(TriageUpdateArgs),
    /// Delete a triage record.
    Delete { id: String },
    /// List the diagnosis reference.
    Diagnoses,
    /// Rank diagnoses for a set of symptoms.
    Match {
        /// Symptom, repeatable or comma-separated
        #[arg(long = "symptom", required = true, value_delimiter = ',')]
        symptoms: Vec<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TriageCreateArgs {
    /// Patient ID
    #[arg(long)]
    pub patient: String,
    /// Symptom, repeatable or comma-separated
    #[arg(long = "symptom", value_delimiter = ',')]
    pub symptoms: Vec<String>,
    /// low, moderate, high or critical
    #[arg(long, default_value = "low")]
    pub severity: String,
    #[arg(long)]
    pub notes: Option<String>,
    /// Do not attach ranked diagnosis matches
    #[arg(long)]
    pub no_match: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TriageUpdateArgs {
    pub id: String,
    /// Replacement symptom list, repeatable or comma-separated
    #[arg(long = "symptom", value_delimiter = ',')]
    pub symptoms: Vec<String>,
    #[arg(long)]
    pub severity: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Do not re-rank diagnoses when symptoms change
    #[arg(long)]
    pub no_match: bool,
}
