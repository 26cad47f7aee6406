//! Serde helpers for record ids.
//!
//! The backend stores records in MongoDB and sends `_id`. With virtuals
//! enabled it sends `id` as well, carrying the same value. Records accept
//! either key or both (`id` wins), and always serialize a single `id`.
//!
//! The id field is flattened so both keys reach the helper:
//!
//! ```ignore
//! #[serde(
//!     flatten,
//!     deserialize_with = "record_id::deserialize",
//!     serialize_with = "record_id::serialize"
//! )]
//! #[schemars(with = "record_id::IdKey")]
//! pub id: String,
//! ```

use schemars::JsonSchema;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
struct IdKeys {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "_id", default)]
    mongo_id: Option<String>,
}

impl IdKeys {
    fn resolve(self) -> Option<String> {
        self.id.filter(|id| !id.is_empty()).or(self.mongo_id)
    }
}

/// Schema of a required flattened id.
#[allow(dead_code)]
#[derive(JsonSchema)]
pub struct IdKey {
    pub id: String,
}

/// Schema of an optional flattened id.
#[allow(dead_code)]
#[derive(JsonSchema)]
pub struct OptionalIdKey {
    pub id: Option<String>,
}

/// Read `id`, falling back to `_id`.
///
/// # Errors
///
/// Fails with a missing-field error when neither key is present.
pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    IdKeys::deserialize(d)?
        .resolve()
        .ok_or_else(|| D::Error::missing_field("id"))
}

/// Like [`deserialize`] for records whose id may be absent.
///
/// # Errors
///
/// Fails only when a present key is not a string.
pub fn deserialize_optional<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(IdKeys::deserialize(d)?.resolve())
}

/// Like [`deserialize`], with a missing id read as `""`.
///
/// # Errors
///
/// Fails only when a present key is not a string.
pub fn deserialize_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(IdKeys::deserialize(d)?.resolve().unwrap_or_default())
}

/// Write the id under `id`.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S: Serializer>(id: &str, s: S) -> Result<S::Ok, S::Error> {
    let mut record = s.serialize_struct("RecordId", 1)?;
    record.serialize_field("id", id)?;
    record.end()
}

/// Write the id under `id`, or nothing when absent.
///
/// # Errors
///
/// Propagates serializer errors.
#[allow(clippy::ref_option)]
pub fn serialize_optional<S: Serializer>(id: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    let mut record = s.serialize_struct("RecordId", usize::from(id.is_some()))?;
    if let Some(id) = id {
        record.serialize_field("id", id)?;
    }
    record.end()
}
