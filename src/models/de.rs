//! Lenient field decoders for server payloads.
//!
//! The API serializes timestamps straight from the database (usually naive,
//! sometimes with an offset) and money either as a number or a string.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Parses a timestamp in any of the shapes the server emits.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'"))),
    }
}

pub fn money<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .map(Some)
            .map_err(D::Error::custom),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Decimal::from_str(s.trim())
            .map(Some)
            .map_err(D::Error::custom),
        other => Err(D::Error::custom(format!(
            "expected a number or numeric string, got {other}"
        ))),
    }
}

/// Treats `""` the same as a missing value.
pub fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

/// Decodes `null` to the type's default, like a missing field.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2024-03-05T10:20:30", "2024-03-05 10:20:30")]
    #[case("2024-03-05T10:20:30.123456", "2024-03-05 10:20:30")]
    #[case("2024-03-05T10:20:30Z", "2024-03-05 10:20:30")]
    #[case("2024-03-05T12:20:30+02:00", "2024-03-05 10:20:30")]
    #[case("2024-03-05", "2024-03-05 00:00:00")]
    fn parses_server_timestamps(#[case] raw: &str, #[case] expected: &str) {
        let parsed = parse_timestamp(raw).unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), expected);
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[derive(Deserialize)]
    struct Amount {
        #[serde(default, deserialize_with = "money")]
        value: Option<Decimal>,
    }

    #[test]
    fn money_accepts_numbers_and_strings() {
        let from_number: Amount = serde_json::from_str(r#"{"value": 125000.5}"#).unwrap();
        let from_string: Amount = serde_json::from_str(r#"{"value": "125000.50"}"#).unwrap();
        let missing: Amount = serde_json::from_str("{}").unwrap();
        let null: Amount = serde_json::from_str(r#"{"value": null}"#).unwrap();

        assert_eq!(from_number.value, Some(Decimal::new(1250005, 1)));
        assert_eq!(from_string.value, Some(Decimal::new(12500050, 2)));
        assert!(missing.value.is_none());
        assert!(null.value.is_none());
        assert!(serde_json::from_str::<Amount>(r#"{"value": [1]}"#).is_err());
    }

    #[derive(Deserialize)]
    struct Tagged {
        #[serde(default, deserialize_with = "or_default")]
        label: String,
    }

    #[test]
    fn null_falls_back_to_default() {
        let null: Tagged = serde_json::from_str(r#"{"label": null}"#).unwrap();
        let set: Tagged = serde_json::from_str(r#"{"label": "x"}"#).unwrap();

        assert!(null.label.is_empty());
        assert_eq!(set.label, "x");
    }
}
