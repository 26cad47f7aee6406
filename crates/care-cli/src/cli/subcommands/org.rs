use chrono::NaiveDate;
use clap::{Args, Subcommand};

use super::ListArgs;

/// Organization commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// List organizations.
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Filter by subscription status
        #[arg(long)]
        status: Option<String>,
    },
    /// Get an organization by ID.
    Get { id: String },
    /// Register an organization.
    Create(OrgCreateArgs),
    /// Update an organization.
    Update(OrgUpdateArgs),
    /// Delete an organization.
    Delete { id: String },
}

#[derive(Clone, Debug, Args)]
pub struct OrgCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub admin_name: String,
    #[arg(long)]
    pub admin_email: String,
    #[arg(long)]
    pub admin_phone: Option<String>,
    /// active, trial, inactive, expired or cancelled
    #[arg(long)]
    pub status: Option<String>,
    /// Subscription start (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Subscription end (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<NaiveDate>,
    /// Licensed seats
    #[arg(long)]
    pub seats: u32,
}

#[derive(Clone, Debug, Args)]
pub struct OrgUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long, requires = "admin_email")]
    pub admin_name: Option<String>,
    #[arg(long, requires = "admin_name")]
    pub admin_email: Option<String>,
    /// Sent with the admin name and email; the admin is replaced as a whole
    #[arg(long, requires = "admin_name")]
    pub admin_phone: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub start: Option<NaiveDate>,
    #[arg(long)]
    pub end: Option<NaiveDate>,
    #[arg(long)]
    pub seats: Option<u32>,
}
