use care_store::DashboardStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CompanyCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Flattened dashboard figures for table output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardOverview {
    company: Option<String>,
    total_psychologists: u64,
    active_psychologists: u64,
    inactive_psychologists: u64,
    total_patients: u64,
    total_triages: u64,
    seats: String,
    seat_utilization: String,
    critical_triages: u64,
    busiest_psychologist: Option<String>,
}

/// Handle `carectl company`.
pub async fn handle(
    action: &CompanyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CompanyCommands::Dashboard => {
            let mut store = DashboardStore::new(ctx.client.clone());
            let dashboard = with_spinner("Fetching company dashboard", store.fetch()).await?;

            if !flags.is_table() {
                return output(dashboard, flags.format);
            }
            let summary = &dashboard.summary;
            let overview = DashboardOverview {
                company: dashboard.company.as_ref().map(|c| c.name.clone()),
                total_psychologists: summary.total_psychologists,
                active_psychologists: summary.active_psychologists,
                inactive_psychologists: dashboard.inactive_psychologists(),
                total_patients: summary.total_patients,
                total_triages: summary.total_triages,
                seats: format!("{}/{}", summary.used_seats, summary.total_seats),
                seat_utilization: format!("{:.1}%", dashboard.seat_utilization()),
                critical_triages: dashboard
                    .triages_with_severity(care_core::enums::Severity::Critical),
                busiest_psychologist: dashboard
                    .busiest_psychologist()
                    .map(|w| format!("{} ({} patients)", w.name, w.patient_count)),
            };
            output(&overview, flags.format)
        }
    }
}
