use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Organization;
use crate::enums::Severity;

/// Headline counts on the company-admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total_psychologists: u64,
    pub active_psychologists: u64,
    pub total_patients: u64,
    pub total_triages: u64,
    pub total_seats: u64,
    pub used_seats: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyCount {
    /// `YYYY-MM`.
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PsychologistWorkload {
    pub psychologist_id: String,
    pub name: String,
    pub patient_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStatistics {
    pub patients_by_month: Vec<MonthlyCount>,
    pub triages_by_severity: Vec<SeverityCount>,
    pub psychologist_workload: Vec<PsychologistWorkload>,
}

/// Aggregate view returned by `/api/company/details`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDashboard {
    #[serde(default)]
    pub company: Option<Organization>,
    #[serde(default)]
    pub summary: DashboardSummary,
    #[serde(default)]
    pub statistics: DashboardStatistics,
}

impl CompanyDashboard {
    /// Used seats as a percentage of total seats; `0.0` with no seats.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn seat_utilization(&self) -> f64 {
        if self.summary.total_seats == 0 {
            return 0.0;
        }
        self.summary.used_seats as f64 / self.summary.total_seats as f64 * 100.0
    }

    #[must_use]
    pub const fn inactive_psychologists(&self) -> u64 {
        self.summary
            .total_psychologists
            .saturating_sub(self.summary.active_psychologists)
    }

    /// Triage count for one severity, zero when the server omitted it.
    #[must_use]
    pub fn triages_with_severity(&self, severity: Severity) -> u64 {
        self.statistics
            .triages_by_severity
            .iter()
            .filter(|c| c.severity == severity)
            .map(|c| c.count)
            .sum()
    }

    /// Psychologist carrying the most patients. Ties go to the first listed.
    #[must_use]
    pub fn busiest_psychologist(&self) -> Option<&PsychologistWorkload> {
        self.statistics
            .psychologist_workload
            .iter()
            .fold(None, |best: Option<&PsychologistWorkload>, w| match best {
                Some(b) if b.patient_count >= w.patient_count => Some(b),
                _ => Some(w),
            })
    }
}
