//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (429 with `Retry-After`, 401, and other
//! non-success codes) and error-message extraction so resource modules only
//! build requests and decode bodies.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Seconds to wait when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. On failure the message is taken
/// from the body (see [`extract_error_message`]) or falls back to `fallback`.
pub async fn check_response(
    resp: reqwest::Response,
    fallback: &str,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ApiError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = extract_error_message(&body).unwrap_or_else(|| fallback.to_string());
    tracing::warn!(status = status.as_u16(), %message, "api request failed");

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized { message });
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Pull a human-readable message out of an error body.
///
/// Tries, in order: a string `error`, `error.message`, then `message`.
/// Blank strings are skipped.
#[must_use]
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let text = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    text(value.get("error"))
        .or_else(|| text(value.get("error").and_then(|e| e.get("message"))))
        .or_else(|| text(value.get("message")))
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

/// Read a body as JSON. An empty body reads as `null`.
pub async fn read_json(resp: reqwest::Response) -> Result<Value, ApiError> {
    let text = resp.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Decode a single-record body, accepting `{ "data": T, ... }` or a bare `T`.
pub fn decode_single<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    let inner = match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(inner).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Server-supplied `message` field, if any.
#[must_use]
pub fn server_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
