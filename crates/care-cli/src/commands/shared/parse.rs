use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse a lowercase enum value using serde deserialization.
///
/// Values that only land in a catch-all variant are rejected: what the
/// user typed must read back unchanged.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned + Serialize,
{
    let normalized = Value::String(raw.trim().to_ascii_lowercase());
    let parsed: T = serde_json::from_value(normalized.clone())
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))?;
    if serde_json::to_value(&parsed)? != normalized {
        anyhow::bail!("invalid {field} '{raw}'");
    }
    Ok(parsed)
}

/// Trim entries and drop blanks.
#[must_use]
pub fn clean_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use care_core::enums::{Severity, SubscriptionStatus};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_case_insensitively() {
        let severity: Severity = parse_enum("High", "severity").expect("severity should parse");
        assert_eq!(severity, Severity::High);
    }

    #[test]
    fn catch_all_values_are_rejected() {
        let err = parse_enum::<SubscriptionStatus>("paused", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'paused'"));
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Severity>("severe", "severity").expect_err("should fail");
        assert!(err.to_string().contains("invalid severity 'severe'"));
    }

    #[test]
    fn clean_list_drops_blanks() {
        let raw = vec![" insomnia ".to_string(), String::new(), "worry".to_string()];
        assert_eq!(clean_list(&raw), vec!["insomnia", "worry"]);
    }
}
