use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Severity;
use crate::{record_id, server_dates};
use crate::validation::{Validate, ValidationErrors, Validator};

/// A diagnosis from the reference list, with the symptoms that indicate it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    #[serde(
        flatten,
        deserialize_with = "record_id::deserialize_optional",
        serialize_with = "record_id::serialize_optional"
    )]
    #[schemars(with = "record_id::OptionalIdKey")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// How well a triage's symptoms match one diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisMatch {
    pub diagnosis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub matched_symptoms: Vec<String>,
    /// Fraction of the diagnosis' symptoms that were reported, in `[0, 1]`.
    #[serde(default)]
    pub score: f64,
}

/// A clinical intake record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Triage {
    #[serde(
        flatten,
        deserialize_with = "record_id::deserialize",
        serialize_with = "record_id::serialize"
    )]
    #[schemars(with = "record_id::IdKey")]
    pub id: String,
    #[serde(default)]
    pub patient: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub severity: Severity,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub diagnosis_matches: Vec<DiagnosisMatch>,
    #[serde(default, deserialize_with = "server_dates::option_datetime")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Triage {
    #[must_use]
    pub fn best_match(&self) -> Option<&DiagnosisMatch> {
        self.diagnosis_matches
            .iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriageDraft {
    pub patient: String,
    pub symptoms: Vec<String>,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_matches: Vec<DiagnosisMatch>,
}

impl Validate for TriageDraft {
    fn validate(&self, _today: NaiveDate) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("patient", &self.patient)
            .not_empty_list("symptoms", &self.symptoms)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis_matches: Option<Vec<DiagnosisMatch>>,
}

impl Validate for TriagePatch {
    fn validate(&self, _today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        if let Some(symptoms) = &self.symptoms {
            validator.not_empty_list("symptoms", symptoms);
        }
        validator.finish()
    }
}
