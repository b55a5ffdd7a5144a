//! Serde adapters for the value formats the Gelato API emits.
//!
//! Timestamps arrive either as RFC 3339 (`2023-06-13T11:02:14Z`) or with a
//! compact offset (`2023-06-13T11:02:14+0000`). Some numeric fields arrive as
//! JSON strings.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

const COMPACT_OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M:%S%z"];

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    COMPACT_OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Required timestamp fields.
pub mod timestamp {
    use super::{de, parse_timestamp, DateTime, Deserialize, Deserializer, Serializer, Utc};

    /// Serializes as RFC 3339.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    /// Deserializes RFC 3339 or compact-offset timestamps.
    ///
    /// # Errors
    ///
    /// Fails when the string matches neither format.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

/// Optional timestamp fields. Pair with `#[serde(default)]`.
pub mod option_timestamp {
    use super::{de, parse_timestamp, DateTime, Deserialize, Deserializer, Serializer, Utc};

    /// Serializes as RFC 3339 or `null`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_str(&value.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional timestamp; `null` and `""` map to `None`.
    ///
    /// # Errors
    ///
    /// Fails when a non-empty string matches neither format.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => parse_timestamp(&raw)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'"))),
        }
    }
}

/// Numbers that may be sent as JSON strings (`"1"`, `"12.5"`).
pub mod flexible_f64 {
    use super::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    /// Serializes as a JSON number.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(*value)
    }

    /// Accepts a number or a numeric string.
    ///
    /// # Errors
    ///
    /// Fails when a string does not parse as a number.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid number '{s}'"))),
        }
    }
}
