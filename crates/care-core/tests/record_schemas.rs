//! JSON schemas for record types carry the server's wire names.

use care_core::entities::*;
use schemars::schema_for;

fn property_names(schema: &serde_json::Value) -> Vec<String> {
    schema["properties"]
        .as_object()
        .map(|props| props.keys().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn organization_schema_uses_camel_case() {
    let schema = serde_json::to_value(schema_for!(Organization)).unwrap();
    let names = property_names(&schema);
    assert!(names.contains(&"subscriptionEndDate".to_string()));
    assert!(names.contains(&"totalSeats".to_string()));
    assert!(!names.iter().any(|n| n.contains('_')));
}

#[test]
fn draft_schemas_require_form_fields() {
    let schema = serde_json::to_value(schema_for!(OrganizationDraft)).unwrap();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    assert!(required.contains(&"name"));
    assert!(required.contains(&"admin"));
    assert!(required.contains(&"totalSeats"));
}

#[test]
fn triage_schema_lists_severity_values() {
    let schema = serde_json::to_value(schema_for!(TriageDraft)).unwrap();
    let rendered = schema.to_string();
    for value in ["low", "moderate", "high", "critical"] {
        assert!(rendered.contains(value), "missing severity {value}");
    }
}
