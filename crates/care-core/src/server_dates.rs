//! Serde helpers for the date strings the server emits.
//!
//! Timestamps normally arrive as RFC 3339 (`2025-03-01T00:00:00.000Z`), but
//! subscription dates saved from date pickers sometimes come back as a bare
//! `YYYY-MM-DD`. Both are accepted; a bare date means midnight UTC.
//!
//! ```ignore
//! #[serde(default, deserialize_with = "server_dates::option_datetime")]
//! pub subscription_end_date: Option<DateTime<Utc>>,
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date.
#[must_use]
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Deserialize an optional server date. `null` and `""` become `None`.
///
/// # Errors
///
/// Fails when a non-empty string is neither RFC 3339 nor `YYYY-MM-DD`.
pub fn option_datetime<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_datetime(value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{value}'"))),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_rfc3339_with_millis() {
        let dt = parse_datetime("2025-03-01T10:15:00.000Z").unwrap();
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn parses_bare_date_as_midnight() {
        let dt = parse_datetime("2025-12-31").unwrap();
        assert_eq!(dt.day(), 31);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_datetime("next tuesday").is_none());
    }

    #[derive(serde::Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "option_datetime")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn empty_and_null_are_none() {
        let a: Holder = serde_json::from_str(r#"{"at": ""}"#).unwrap();
        let b: Holder = serde_json::from_str(r#"{"at": null}"#).unwrap();
        let c: Holder = serde_json::from_str("{}").unwrap();
        assert!(a.at.is_none() && b.at.is_none() && c.at.is_none());
    }

    #[test]
    fn invalid_string_is_an_error() {
        let parsed = serde_json::from_str::<Holder>(r#"{"at": "soon"}"#);
        assert!(parsed.is_err());
    }
}
