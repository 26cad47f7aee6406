//! Generic CRUD over one REST collection.

use care_core::pagination::{ListEnvelope, ListQuery, Page};
use care_core::validation::{Validate, ValidationErrors};
use chrono::Utc;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::{decode_single, server_message};
use crate::{ApiClient, ApiError};

/// A record type served by a REST collection at [`Resource::PATH`].
pub trait Resource: DeserializeOwned + Serialize + Clone + Send + Sync {
    /// Create payload.
    type Draft: Serialize + Validate + Send + Sync;
    /// Update payload; absent fields are left unchanged.
    type Patch: Serialize + Validate + Send + Sync;

    /// Collection path, e.g. `/api/admin/organizations`.
    const PATH: &'static str;
    /// Singular noun for messages.
    const NOUN: &'static str;
    /// Plural noun for messages.
    const PLURAL: &'static str;
    /// Whether [`Resource::check_patch`] needs the stored record.
    const CHECKS_PATCH: bool = false;

    fn id(&self) -> &str;

    /// Checks a patch against the record it would modify.
    ///
    /// # Errors
    ///
    /// Returns the field errors the patch would introduce.
    fn check_patch(_current: &Self, _patch: &Self::Patch) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// Outcome of a create/update/delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    /// Record echoed by the server, if it sent one.
    pub record: Option<T>,
    /// Server message, or a generic one for the operation.
    pub message: String,
}

/// "organization" -> "Organization".
pub(crate) fn capitalized(noun: &str) -> String {
    let mut chars = noun.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

pub(crate) fn item_path(base: &str, id: &str) -> String {
    format!("{base}/{}", urlencoding::encode(id))
}

pub(crate) fn decode_mutation<T: DeserializeOwned>(value: Value, default_message: String) -> Mutation<T> {
    let message = server_message(&value).unwrap_or(default_message);
    let record = match value {
        Value::Null => None,
        Value::Object(mut map) if map.contains_key("data") => match map.remove("data") {
            Some(Value::Null) | None => None,
            Some(data) => decode_record(data),
        },
        other => decode_record(other),
    };
    Mutation { record, message }
}

fn decode_record<T: DeserializeOwned>(value: Value) -> Option<T> {
    serde_json::from_value(value)
        .map_err(|e| tracing::debug!(error = %e, "mutation response carried no usable record"))
        .ok()
}

fn validate(payload: &impl Validate) -> Result<(), ApiError> {
    payload.validate(Utc::now().date_naive())?;
    Ok(())
}

fn to_body(payload: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Parse(e.to_string()))
}

impl ApiClient {
    /// Fetch one page of `R`.
    ///
    /// Accepts `{ data, pagination }` or a bare array; the latter reads as a
    /// single page holding every item.
    ///
    /// # Errors
    ///
    /// Transport, status, or body-shape errors.
    pub async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Page<R>, ApiError> {
        let fallback = format!("Failed to fetch {}", R::PLURAL);
        let value = self
            .send(Method::GET, R::PATH, &query.to_pairs(), None, &fallback)
            .await?;
        let envelope: ListEnvelope<R> = match value {
            Value::Array(_) => ListEnvelope {
                data: serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))?,
                pagination: None,
            },
            other => serde_json::from_value(other).map_err(|e| ApiError::Parse(e.to_string()))?,
        };
        Ok(Page::from(envelope))
    }

    /// # Errors
    ///
    /// Transport, status, or body-shape errors.
    pub async fn get<R: Resource>(&self, id: &str) -> Result<R, ApiError> {
        let fallback = format!("Failed to fetch {}", R::NOUN);
        let value = self
            .send(Method::GET, &item_path(R::PATH, id), &[], None, &fallback)
            .await?;
        decode_single(value)
    }

    /// Validate and POST a draft.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] without any request when the draft is
    /// invalid; otherwise transport or status errors.
    pub async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<Mutation<R>, ApiError> {
        validate(draft)?;
        let fallback = format!("Failed to create {}", R::NOUN);
        let value = self
            .send(Method::POST, R::PATH, &[], Some(to_body(draft)?), &fallback)
            .await?;
        Ok(decode_mutation(
            value,
            format!("{} created successfully", capitalized(R::NOUN)),
        ))
    }

    /// Validate and PUT a patch.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::create`].
    pub async fn update<R: Resource>(
        &self,
        id: &str,
        patch: &R::Patch,
    ) -> Result<Mutation<R>, ApiError> {
        validate(patch)?;
        let fallback = format!("Failed to update {}", R::NOUN);
        let value = self
            .send(
                Method::PUT,
                &item_path(R::PATH, id),
                &[],
                Some(to_body(patch)?),
                &fallback,
            )
            .await?;
        Ok(decode_mutation(
            value,
            format!("{} updated successfully", capitalized(R::NOUN)),
        ))
    }

    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn delete<R: Resource>(&self, id: &str) -> Result<Mutation<R>, ApiError> {
        let fallback = format!("Failed to delete {}", R::NOUN);
        let value = self
            .send(Method::DELETE, &item_path(R::PATH, id), &[], None, &fallback)
            .await?;
        Ok(decode_mutation(
            value,
            format!("{} deleted successfully", capitalized(R::NOUN)),
        ))
    }
}
