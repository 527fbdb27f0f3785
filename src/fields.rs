//! Document elements: roles, fields, filled-in values and signatures.

use crate::convert::{ConvertError, base64_bytes, string_int, string_uri, unix_timestamp};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use std::fmt;
use url::Url;

/// A signer role defined on a document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Role {
    /// Role identifier.
    pub unique_id: String,
    /// Position of this role in the signing order.
    #[serde(with = "string_int")]
    pub signing_order: i64,
    /// Role name, e.g. "Signer 1".
    pub name: String,
}

/// Kind of a document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Signature,
    Initials,
    Checkbox,
    Enumeration,
    Attachment,
    Hyperlink,
    Radiobutton,
    #[serde(other)]
    Unknown,
}

/// A field placed on a document and assigned to a role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub role_id: String,
    #[serde(default)]
    pub role: String,
    /// Email of the user who placed the field.
    #[serde(default)]
    pub originator: Option<String>,
    /// Email of the user who filled the field, once filled.
    #[serde(default)]
    pub fulfiller: Option<String>,
    /// Identifier of the value element (text, signature, ...) filling this field.
    #[serde(default)]
    pub element_id: Option<String>,
}

/// Value of a text box, dropdown or date-time picker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextField {
    pub id: String,
    /// User who filled the field.
    pub user_id: String,
    /// Email of the user who filled the field.
    #[serde(default)]
    pub email: Option<String>,
    /// Raw text value.
    pub data: String,
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.data)
    }
}

/// Target of a hyperlink field.
///
/// Validated as an absolute URI on read, but displayed and written back
/// exactly as SignNow sent it: `Url` would otherwise normalize
/// `https://example.com` to `https://example.com/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    raw: String,
    url: Url,
}

impl Hyperlink {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ConvertError> {
        let raw = raw.into();
        let url = string_uri::decode(&raw)?;
        Ok(Self { raw, url })
    }

    /// The link as received.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed (normalized) URI.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Hyperlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Hyperlink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Hyperlink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::parse(String::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

/// Value of a hyperlink field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HyperlinkField {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub label: String,
    pub data: Hyperlink,
}

impl fmt::Display for HyperlinkField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

/// A filled-in field value.
///
/// The set of value kinds is fixed by the API, so this is a closed enum keyed
/// by field type rather than an open hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldValue {
    Text(TextField),
    Hyperlink(HyperlinkField),
}

impl FieldValue {
    /// Identity of the value element.
    pub fn id(&self) -> &str {
        match self {
            FieldValue::Text(field) => &field.id,
            FieldValue::Hyperlink(field) => &field.id,
        }
    }

    /// Identity of the user who filled the field.
    pub fn user_id(&self) -> &str {
        match self {
            FieldValue::Text(field) => &field.user_id,
            FieldValue::Hyperlink(field) => &field.user_id,
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Hyperlink(_) => FieldType::Hyperlink,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(field) => field.fmt(f),
            FieldValue::Hyperlink(field) => field.fmt(f),
        }
    }
}

/// A signature or initials element on a document.
///
/// Only `signature_request_id` takes part in status derivation; SignNow
/// omits the other attributes in some listings, so they are optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Signature {
    #[serde(default)]
    pub id: Option<String>,
    /// User who signed.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Freeform invite this signature answers, if any.
    #[serde(default)]
    pub signature_request_id: Option<String>,
    /// Email of the signer.
    #[serde(default)]
    pub email: Option<String>,
    /// When the signature was made.
    #[serde(default, with = "unix_timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    /// Signature image; empty when not sent.
    #[serde(default, with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl fmt::Display for Signature {
    /// Formats the signature image as base64.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base64_bytes::encode(&self.data))
    }
}
