use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{record_id, server_dates};
use crate::validation::{Validate, ValidationErrors, Validator};

/// Minimum password length accepted by the account form.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A psychologist account ("individual" on the admin API).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Psychologist {
    #[serde(
        flatten,
        deserialize_with = "record_id::deserialize",
        serialize_with = "record_id::serialize"
    )]
    #[schemars(with = "record_id::IdKey")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Owning organization id, absent for independent practitioners.
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default, deserialize_with = "server_dates::option_datetime")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PsychologistDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for PsychologistDraft {
    fn validate(&self, _today: NaiveDate) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name)
            .email("email", &self.email)
            .min_len("password", &self.password, MIN_PASSWORD_LEN)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PsychologistPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Validate for PsychologistPatch {
    fn validate(&self, _today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        validator.not_blank("name", self.name.as_deref());
        if let Some(email) = self.email.as_deref() {
            validator.email("email", email);
        }
        validator.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn parses_individual_with_missing_optionals() {
        let json = r#"{"_id": "p1", "name": "Dr. Okafor", "email": "okafor@clinic.org", "isActive": true}"#;
        let p: Psychologist = serde_json::from_str(json).unwrap();
        assert!(p.is_active);
        assert!(p.specialization.is_none());
        assert!(p.created_at.is_none());
    }

    #[test]
    fn short_password_is_rejected() {
        let draft = PsychologistDraft {
            name: "Dr. Okafor".into(),
            email: "okafor@clinic.org".into(),
            password: "short".into(),
            ..Default::default()
        };
        let err = draft.validate(today()).unwrap_err();
        assert_eq!(err.fields(), vec!["password"]);
    }

    #[test]
    fn patch_with_blank_email_is_rejected() {
        let patch = PsychologistPatch {
            email: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            patch.validate(today()).unwrap_err().message_for("email"),
            Some("is required")
        );
    }
}
