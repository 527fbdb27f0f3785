//! Converters for SignNow wire formats.
//!
//! The SignNow API encodes several values in ways that do not map directly to
//! native types: timestamps are Unix seconds (sometimes quoted), signature
//! images are base64, counters and flags are often strings, and links are
//! plain strings. Each submodule exposes a pure `encode`/`decode` pair plus
//! `serialize`/`deserialize` adapters for use with `#[serde(with = "...")]`.
//!
//! For every valid `x`, `decode(encode(x)) == x`.

use serde::Deserialize;
use thiserror::Error;

/// A wire value could not be converted to its native type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Not a Unix timestamp in seconds, or out of the representable range.
    #[error("invalid unix timestamp: {0}")]
    InvalidTimestamp(String),

    /// Not valid standard base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    /// Not a base-10 integer.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// Not an absolute URI.
    #[error("invalid URI: {0}")]
    InvalidUri(String),

    /// Not one of `1`, `0`, `true`, `false`.
    #[error("invalid boolean: {0}")]
    InvalidBool(String),
}

/// A JSON value as SignNow may send it: bare or quoted.
///
/// Numbers that do not fit an `i64` and non-scalar values are kept so the
/// adapters can reject them with their own error kind.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Other(serde::de::IgnoredAny),
}

impl Scalar {
    fn raw(&self) -> String {
        match self {
            Scalar::Bool(v) => v.to_string(),
            Scalar::Int(v) => v.to_string(),
            Scalar::UInt(v) => v.to_string(),
            Scalar::Float(v) => format!("{v:?}"),
            Scalar::Str(v) => v.clone(),
            Scalar::Other(_) => "non-scalar value".to_string(),
        }
    }
}

/// Unix timestamp (seconds) <-> `DateTime<Utc>`.
///
/// Accepts both `1572968124` and `"1572968124"`; always writes a number.
/// Sub-second precision is not carried by the wire format.
pub mod unix_timestamp {
    use super::{ConvertError, Scalar};
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn encode(value: &DateTime<Utc>) -> i64 {
        value.timestamp()
    }

    pub fn decode(secs: i64) -> Result<DateTime<Utc>, ConvertError> {
        Utc.timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| ConvertError::InvalidTimestamp(secs.to_string()))
    }

    /// Decode a quoted timestamp.
    pub fn parse(raw: &str) -> Result<DateTime<Utc>, ConvertError> {
        let secs = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConvertError::InvalidTimestamp(raw.to_string()))?;
        decode(secs)
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(encode(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        from_scalar(Scalar::deserialize(deserializer)?).map_err(D::Error::custom)
    }

    fn from_scalar(value: Scalar) -> Result<DateTime<Utc>, ConvertError> {
        match value {
            Scalar::Int(secs) => decode(secs),
            Scalar::Str(raw) => parse(&raw),
            other => Err(ConvertError::InvalidTimestamp(other.raw())),
        }
    }

    /// `Option<DateTime<Utc>>` variant: `null` or an absent field (with
    /// `#[serde(default)]`) reads as `None`, and `None` is written as `null`.
    pub mod option {
        use super::{Scalar, encode, from_scalar};
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(value) => serializer.serialize_i64(encode(value)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<Scalar>::deserialize(deserializer)?
                .map(from_scalar)
                .transpose()
                .map_err(D::Error::custom)
        }
    }
}

/// Base64 string <-> raw bytes (standard alphabet, padded).
pub mod base64_bytes {
    use super::ConvertError;
    use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn encode(value: &[u8]) -> String {
        BASE64.encode(value)
    }

    pub fn decode(raw: &str) -> Result<Vec<u8>, ConvertError> {
        BASE64
            .decode(raw.trim())
            .map_err(|e| ConvertError::InvalidBase64(format!("{raw:.32}: {e}")))
    }

    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        decode(&raw).map_err(D::Error::custom)
    }
}

/// Quoted integer <-> `i64`. Bare numbers are accepted on read.
pub mod string_int {
    use super::{ConvertError, Scalar};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn encode(value: i64) -> String {
        value.to_string()
    }

    pub fn decode(raw: &str) -> Result<i64, ConvertError> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| ConvertError::InvalidInteger(raw.to_string()))
    }

    pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        match Scalar::deserialize(deserializer)? {
            Scalar::Int(value) => Ok(value),
            Scalar::Str(raw) => decode(&raw),
            other => Err(ConvertError::InvalidInteger(other.raw())),
        }
        .map_err(D::Error::custom)
    }
}

/// URI string <-> [`url::Url`].
pub mod string_uri {
    use super::ConvertError;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use url::Url;

    pub fn encode(value: &Url) -> String {
        value.as_str().to_string()
    }

    pub fn decode(raw: &str) -> Result<Url, ConvertError> {
        Url::parse(raw.trim()).map_err(|e| ConvertError::InvalidUri(format!("{raw}: {e}")))
    }

    pub fn serialize<S: Serializer>(value: &Url, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Url, D::Error> {
        let raw = String::deserialize(deserializer)?;
        decode(&raw).map_err(D::Error::custom)
    }
}

/// `"1"`/`"0"` (or `true`/`false`) <-> `bool`. Written as `"1"`/`"0"`.
pub mod string_bool {
    use super::{ConvertError, Scalar};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn encode(value: bool) -> String {
        if value { "1" } else { "0" }.to_string()
    }

    pub fn decode(raw: &str) -> Result<bool, ConvertError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => Err(ConvertError::InvalidBool(raw.to_string())),
        }
    }

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Scalar::deserialize(deserializer)? {
            Scalar::Bool(value) => Ok(value),
            Scalar::Int(1) => Ok(true),
            Scalar::Int(0) => Ok(false),
            Scalar::Str(raw) => decode(&raw),
            other => Err(ConvertError::InvalidBool(other.raw())),
        }
        .map_err(D::Error::custom)
    }
}
