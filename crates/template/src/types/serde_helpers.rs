//! Serde adapters for the shapes found in default template files.
//!
//! Responsibilities:
//! - Accept integers written either as JSON numbers or numeric strings.
//! - Accept event text values written as any JSON scalar.
//! - Parse optional date-times in RFC 3339 or naive ISO form.
//! - Keep secrets out of serialized output.
//!
//! Invariants:
//! - Naive date-times are interpreted as UTC.
//! - Secrets are always serialized as [`REDACTED`], never in clear text.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Replacement text written in place of a secret value.
pub const REDACTED: &str = "********";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a date-time from RFC 3339 (`2023-01-01T00:00:00Z`) or a naive
/// ISO form (`2023-01-01T00:00`), the latter taken as UTC.
pub fn parse_date_time(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let trimmed = raw.trim();
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc)),
        Err(rfc_err) => NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(|naive| naive.and_utc())
            .ok_or(rfc_err),
    }
}

/// Integers that may be written as `100` or `"100"`.
pub mod lenient_int {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText<T> {
        Number(T),
        Text(String),
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
        <T as FromStr>::Err: Display,
    {
        match NumberOrText::<T>::deserialize(deserializer)? {
            NumberOrText::Number(value) => Ok(value),
            NumberOrText::Text(text) => text
                .trim()
                .parse()
                .map_err(|e| D::Error::custom(format!("invalid number {text:?}: {e}"))),
        }
    }

    /// Optional variant; `null` maps to `None`.
    pub mod option {
        use super::NumberOrText;
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer};
        use std::fmt::Display;
        use std::str::FromStr;

        pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: Deserialize<'de> + FromStr,
            <T as FromStr>::Err: Display,
        {
            match Option::<NumberOrText<T>>::deserialize(deserializer)? {
                None => Ok(None),
                Some(NumberOrText::Number(value)) => Ok(Some(value)),
                Some(NumberOrText::Text(text)) => text
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|e| D::Error::custom(format!("invalid number {text:?}: {e}"))),
            }
        }
    }
}

/// Event text values that may be written as any JSON scalar.
///
/// Numbers and booleans are kept as their JSON text; `null` entries are
/// skipped. Arrays and objects are rejected.
pub mod lenient_string {
    use serde_json::Value;

    fn scalar_text(value: Value) -> Result<Option<String>, String> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            Value::Bool(b) => Ok(Some(b.to_string())),
            other => Err(format!("expected a text value, found {other}")),
        }
    }

    /// List of text values, such as `fingerprintFields`.
    pub mod list {
        use super::scalar_text;
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer};
        use serde_json::Value;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
            let mut texts = Vec::with_capacity(values.len());
            for value in values {
                if let Some(text) = scalar_text(value).map_err(D::Error::custom)? {
                    texts.push(text);
                }
            }
            Ok(texts)
        }
    }

    /// Map of text values, such as `properties`.
    pub mod map {
        use super::scalar_text;
        use serde::de::Error as _;
        use serde::{Deserialize, Deserializer};
        use serde_json::Value;
        use std::collections::BTreeMap;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let entries =
                Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
            let mut texts = BTreeMap::new();
            for (key, value) in entries {
                match scalar_text(value) {
                    Ok(Some(text)) => {
                        texts.insert(key, text);
                    }
                    Ok(None) => {}
                    Err(e) => return Err(D::Error::custom(format!("property {key:?}: {e}"))),
                }
            }
            Ok(texts)
        }
    }
}

/// AR server port; a value that is not a valid port is dropped rather than rejected.
pub mod lenient_port {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        let port = match &raw {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            Some(_) => None,
        };
        if port.is_none() && raw.as_ref().is_some_and(|v| !v.is_null()) {
            tracing::debug!("default port is not a valid port, skipping the port setting");
        }
        Ok(port)
    }
}

/// Optional date-time in RFC 3339 or naive ISO form; blank strings map to `None`.
pub mod optional_date_time {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => super::parse_date_time(&s)
                .map(Some)
                .map_err(|e| D::Error::custom(format!("invalid date-time {s:?}: {e}"))),
        }
    }
}

/// Optional secret read from plain text and written redacted.
pub mod optional_secret {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(_) => serializer.serialize_str(super::REDACTED),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|s| SecretString::new(s.into())))
    }
}
