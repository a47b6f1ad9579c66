//! Serde helper functions for request deserialization.
//!
//! These functions handle the quirks of loosely-typed request bodies where
//! empty strings should be treated as None for required-field checks.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
    }

    #[test]
    fn test_present_string() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": "hello"}"#).unwrap();
        assert_eq!(parsed.string_field, Some("hello".to_string()));
    }

    #[test]
    fn test_empty_string_becomes_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": ""}"#).unwrap();
        assert_eq!(parsed.string_field, None);
    }

    #[test]
    fn test_whitespace_string_becomes_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": "   "}"#).unwrap();
        assert_eq!(parsed.string_field, None);
    }

    #[test]
    fn test_missing_field_becomes_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.string_field, None);
    }

    #[test]
    fn test_explicit_null_becomes_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"string_field": null}"#).unwrap();
        assert_eq!(parsed.string_field, None);
    }
}
