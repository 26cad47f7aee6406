//! Record structs for every server resource, plus their create (`*Draft`)
//! and update (`*Patch`) payloads.
//!
//! Records mirror the server's camelCase JSON. Ids are read from `id` or
//! Mongo-style `_id` (see [`crate::record_id`]); unknown fields are ignored.

mod company;
mod organization;
mod patient;
mod psychologist;
mod triage;

pub use company::{
    CompanyDashboard, DashboardStatistics, DashboardSummary, MonthlyCount, PsychologistWorkload,
    SeverityCount,
};
pub use organization::{Organization, OrganizationAdmin, OrganizationDraft, OrganizationPatch};
pub use patient::{Patient, PatientDraft, PatientPatch};
pub use psychologist::{Psychologist, PsychologistDraft, PsychologistPatch};
pub use triage::{Diagnosis, DiagnosisMatch, Triage, TriageDraft, TriagePatch};
