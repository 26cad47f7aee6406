use care_core::entities::{
    CompanyDashboard, Diagnosis, DiagnosisMatch, Organization, OrganizationDraft,
    OrganizationPatch, Patient, PatientDraft, PatientPatch, Psychologist, PsychologistDraft,
    PsychologistPatch, Triage, TriageDraft, TriagePatch,
};
use care_core::pagination::Pagination;
use schemars::{JsonSchema, Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Record types `carectl schema` knows about.
pub const SCHEMA_TYPES: &[&str] = &[
    "organization",
    "organization-draft",
    "organization-patch",
    "psychologist",
    "psychologist-draft",
    "psychologist-patch",
    "patient",
    "patient-draft",
    "patient-patch",
    "triage",
    "triage-draft",
    "triage-patch",
    "diagnosis",
    "diagnosis-match",
    "company-dashboard",
    "pagination",
];

fn schema<T: JsonSchema>() -> Schema {
    schema_for!(T)
}

/// Look up a schema by name. Underscores and case are ignored.
pub fn lookup(type_name: &str) -> Option<Schema> {
    let key = type_name.trim().to_ascii_lowercase().replace('_', "-");
    let schema = match key.as_str() {
        "organization" => schema::<Organization>(),
        "organization-draft" => schema::<OrganizationDraft>(),
        "organization-patch" => schema::<OrganizationPatch>(),
        "psychologist" | "individual" => schema::<Psychologist>(),
        "psychologist-draft" => schema::<PsychologistDraft>(),
        "psychologist-patch" => schema::<PsychologistPatch>(),
        "patient" => schema::<Patient>(),
        "patient-draft" => schema::<PatientDraft>(),
        "patient-patch" => schema::<PatientPatch>(),
        "triage" => schema::<Triage>(),
        "triage-draft" => schema::<TriageDraft>(),
        "triage-patch" => schema::<TriagePatch>(),
        "diagnosis" => schema::<Diagnosis>(),
        "diagnosis-match" => schema::<DiagnosisMatch>(),
        "company-dashboard" | "dashboard" => schema::<CompanyDashboard>(),
        "pagination" => schema::<Pagination>(),
        _ => return None,
    };
    Some(schema)
}

/// Handle `carectl schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = lookup(&args.type_name) else {
        anyhow::bail!(
            "unknown type '{}'; expected one of: {}",
            args.type_name,
            SCHEMA_TYPES.join(", ")
        );
    };
    output(&schema, flags.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_resolves() {
        for name in SCHEMA_TYPES {
            assert!(lookup(name).is_some(), "{name} should have a schema");
        }
    }

    #[test]
    fn lookup_is_forgiving() {
        assert!(lookup("Triage_Draft").is_some());
        assert!(lookup("invoice").is_none());
    }

    #[test]
    fn organization_schema_uses_wire_names() {
        let schema = lookup("organization").expect("schema");
        let value = serde_json::to_value(&schema).expect("serialize");
        assert!(value["properties"].get("totalSeats").is_some());
    }
}
