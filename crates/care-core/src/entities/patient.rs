use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{record_id, server_dates};
use crate::validation::{Validate, ValidationErrors, Validator};

/// A patient assigned to a psychologist and, through them, an organization.
///
/// Deleting a patient on the server only sets `isDeleted`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(
        flatten,
        deserialize_with = "record_id::deserialize",
        serialize_with = "record_id::serialize"
    )]
    #[schemars(with = "record_id::IdKey")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "server_dates::option_datetime")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub psychologist: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "server_dates::option_datetime")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psychologist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl Validate for PatientDraft {
    fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name)
            .optional_email("email", self.email.as_deref())
            .date_not_in_future("dateOfBirth", self.date_of_birth, today)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Reassign to another psychologist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psychologist: Option<String>,
}

impl Validate for PatientPatch {
    fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        Validator::new()
            .not_blank("name", self.name.as_deref())
            .optional_email("email", self.email.as_deref())
            .not_blank("psychologist", self.psychologist.as_deref())
            .date_not_in_future("dateOfBirth", self.date_of_birth, today)
            .finish()
    }
}
