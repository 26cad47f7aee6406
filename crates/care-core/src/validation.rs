//! Form validation for create and update payloads.
//!
//! Only shallow checks run here: required fields, email shape, date bounds
//! and seat counts. Everything else is the server's call. A [`Validator`]
//! collects every failing field so they are reported together.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field that failed validation, in the order checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// First message recorded for `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Payloads that can be checked before they are sent.
pub trait Validate {
    /// Validate against `today` (injected so date rules are testable).
    ///
    /// # Errors
    ///
    /// Returns every failing field.
    fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors>;
}

/// Accumulates field errors.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&mut self, field: &str, message: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
        self
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        }
        self
    }

    /// Like [`required`](Self::required) but only when the field is present.
    /// Used by update payloads where absence means "leave unchanged".
    pub fn not_blank(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.required(field, value);
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        } else if !is_valid_email(value) {
            self.fail(field, "must be a valid email address");
        }
        self
    }

    pub fn optional_email(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) if !v.trim().is_empty() && !is_valid_email(v) => {
                self.fail(field, "must be a valid email address");
            }
            _ => {}
        }
        self
    }

    pub fn min_len(&mut self, field: &str, value: &str, min: usize) -> &mut Self {
        if value.chars().count() < min {
            self.fail(field, format!("must be at least {min} characters"));
        }
        self
    }

    pub fn date_not_in_past(
        &mut self,
        field: &str,
        value: Option<NaiveDate>,
        today: NaiveDate,
    ) -> &mut Self {
        if value.is_some_and(|date| date < today) {
            self.fail(field, "cannot be in the past");
        }
        self
    }

    pub fn date_not_in_future(
        &mut self,
        field: &str,
        value: Option<NaiveDate>,
        today: NaiveDate,
    ) -> &mut Self {
        if value.is_some_and(|date| date > today) {
            self.fail(field, "cannot be in the future");
        }
        self
    }

    /// `value` must not precede `earliest` when both are set.
    pub fn date_not_before(
        &mut self,
        field: &str,
        value: Option<NaiveDate>,
        earliest: Option<NaiveDate>,
        earliest_field: &str,
    ) -> &mut Self {
        if let (Some(value), Some(earliest)) = (value, earliest)
            && value < earliest
        {
            self.fail(field, format!("cannot be before {earliest_field}"));
        }
        self
    }

    pub fn at_least(&mut self, field: &str, value: u32, min: u32) -> &mut Self {
        if value < min {
            self.fail(field, format!("must be at least {min}"));
        }
        self
    }

    pub fn not_empty_list(&mut self, field: &str, values: &[String]) -> &mut Self {
        if values.iter().all(|v| v.trim().is_empty()) {
            self.fail(field, "must contain at least one entry");
        }
        self
    }

    /// # Errors
    ///
    /// Returns the collected errors if any check failed.
    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(std::mem::take(&mut self.errors)))
        }
    }
}

/// Shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case("ana@clinic.org", true)]
    #[case("a.b+c@sub.clinic.co", true)]
    #[case("no-at-sign.org", false)]
    #[case("@clinic.org", false)]
    #[case("ana@clinic", false)]
    #[case("ana@.org", false)]
    #[case("ana@clinic.", false)]
    #[case("ana @clinic.org", false)]
    #[case("ana@x@clinic.org", false)]
    fn email_shape(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(input), expected);
    }

    #[test]
    fn collects_every_failure_in_order() {
        let err = Validator::new()
            .required("name", "  ")
            .email("admin.email", "nope")
            .at_least("totalSeats", 0, 1)
            .finish()
            .unwrap_err();

        assert_eq!(err.fields(), vec!["name", "admin.email", "totalSeats"]);
        assert_eq!(err.message_for("name"), Some("is required"));
    }

    #[test]
    fn today_is_not_in_the_past() {
        let today = day(2026, 10, 16);
        assert!(
            Validator::new()
                .date_not_in_past("end", Some(today), today)
                .finish()
                .is_ok()
        );
        assert!(
            Validator::new()
                .date_not_in_past("end", Some(day(2026, 10, 15)), today)
                .finish()
                .is_err()
        );
    }

    #[test]
    fn end_before_start_is_rejected() {
        let err = Validator::new()
            .date_not_before(
                "subscriptionEndDate",
                Some(day(2026, 1, 1)),
                Some(day(2026, 6, 1)),
                "subscriptionStartDate",
            )
            .finish()
            .unwrap_err();
        assert_eq!(
            err.message_for("subscriptionEndDate"),
            Some("cannot be before subscriptionStartDate")
        );
    }

    #[test]
    fn blank_entries_do_not_count_as_a_list() {
        let symptoms = vec![" ".to_string(), String::new()];
        assert!(
            Validator::new()
                .not_empty_list("symptoms", &symptoms)
                .finish()
                .is_err()
        );
    }

    #[test]
    fn display_joins_fields() {
        let err = Validator::new()
            .required("name", "")
            .required("email", "")
            .finish()
            .unwrap_err();
        assert_eq!(err.to_string(), "name: is required; email: is required");
    }
}
