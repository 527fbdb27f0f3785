//! The SignNow document aggregate and its signing status.

use crate::convert::{string_int, unix_timestamp};
use crate::fields::{Field, FieldValue, HyperlinkField, Role, Signature, TextField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Signing status of a document, derived from its invites and signatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignStatus {
    /// No invite was sent, or the invites are in no recognizable state.
    #[default]
    None,
    /// At least one invite is still awaiting a signature.
    Pending,
    /// Every invite has been signed.
    Completed,
}

impl fmt::Display for SignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignStatus::None => "none",
            SignStatus::Pending => "pending",
            SignStatus::Completed => "completed",
        })
    }
}

/// Lifecycle state of a role-based (field) invite.
///
/// Read case-insensitively; values SignNow may add later read as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldInviteStatus {
    Created,
    Pending,
    Fulfilled,
    Skipped,
    Unknown,
}

impl FieldInviteStatus {
    fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "created" => FieldInviteStatus::Created,
            "pending" => FieldInviteStatus::Pending,
            "fulfilled" => FieldInviteStatus::Fulfilled,
            "skipped" => FieldInviteStatus::Skipped,
            _ => FieldInviteStatus::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for FieldInviteStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// A freeform signing request: not bound to a role, answered by a
/// [`Signature`] carrying the same `signature_request_id`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FreeformInvite {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub signer_email: Option<String>,
    #[serde(default)]
    pub originator_email: Option<String>,
    #[serde(default, with = "unix_timestamp::option")]
    pub created: Option<DateTime<Utc>>,
}

/// A role-based signing request with its own lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldInvite {
    #[serde(default)]
    pub id: Option<String>,
    pub status: FieldInviteStatus,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub role_id: Option<String>,
    #[serde(default, with = "unix_timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "unix_timestamp::option")]
    pub updated: Option<DateTime<Utc>>,
}

/// A SignNow document.
///
/// Besides its metadata, a document carries the roles, fields, filled-in
/// values and signatures placed on it, plus the freeform and role-based
/// invites sent for it. Its [`SignStatus`] is computed from those
/// collections on every call to [`SignNowDocument::status`].
///
/// Only `id` is required on the wire; missing metadata reads as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignNowDocument {
    pub id: String,
    /// Id of the document this one was copied from.
    #[serde(default)]
    pub origin_document_id: Option<String>,
    /// User who uploaded the document.
    #[serde(default)]
    pub user_id: String,
    /// User who created the original document.
    #[serde(default)]
    pub origin_user_id: Option<String>,
    #[serde(rename = "document_name", default)]
    pub name: String,
    /// File name the document was uploaded with (.pdf, .docx, ...).
    #[serde(rename = "original_filename", default)]
    pub original_name: String,
    #[serde(default, with = "string_int")]
    pub page_count: i64,
    #[serde(default, with = "unix_timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, with = "unix_timestamp::option")]
    pub updated: Option<DateTime<Utc>>,
    /// Email of the document owner.
    #[serde(default)]
    pub owner: String,
    #[serde(rename = "template", default)]
    pub is_template: bool,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub signatures: Vec<Signature>,
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Freeform invite requests.
    #[serde(rename = "requests", default)]
    pub invite_requests: Vec<FreeformInvite>,
    #[serde(default)]
    pub field_invites: Vec<FieldInvite>,
    #[serde(default)]
    pub texts: Vec<TextField>,
    #[serde(default)]
    pub hyperlinks: Vec<HyperlinkField>,
}

impl SignNowDocument {
    /// Signing status of the document.
    ///
    /// Evaluated in order, first match wins:
    /// 1. `Pending` when fewer signatures than freeform invites exist, or any
    ///    field invite is pending.
    /// 2. `Completed` when every freeform invite is answered by exactly one
    ///    signature, or every field invite is fulfilled.
    /// 3. `None` otherwise.
    ///
    /// More signatures than freeform invites is neither pending nor
    /// completed and yields `None`.
    pub fn status(&self) -> SignStatus {
        if self.has_pending_invites() {
            return SignStatus::Pending;
        }

        if self.is_freeform_invite_signed() || self.is_field_invite_signed() {
            return SignStatus::Completed;
        }

        SignStatus::None
    }

    /// All filled-in text and hyperlink values.
    pub fn field_values(&self) -> Vec<FieldValue> {
        self.texts
            .iter()
            .cloned()
            .map(FieldValue::Text)
            .chain(self.hyperlinks.iter().cloned().map(FieldValue::Hyperlink))
            .collect()
    }

    fn has_pending_invites(&self) -> bool {
        (!self.invite_requests.is_empty() && self.signatures.len() < self.invite_requests.len())
            || self
                .field_invites
                .iter()
                .any(|invite| invite.status == FieldInviteStatus::Pending)
    }

    fn is_freeform_invite_signed(&self) -> bool {
        if self.signatures.is_empty() || self.invite_requests.len() != self.signatures.len() {
            return false;
        }

        // Each invite must consume its own signature; with equal counts this
        // makes the join one-to-one.
        let mut unmatched: HashMap<&str, usize> = HashMap::new();
        for request_id in self
            .signatures
            .iter()
            .filter_map(|signature| signature.signature_request_id.as_deref())
        {
            *unmatched.entry(request_id).or_default() += 1;
        }

        self.invite_requests
            .iter()
            .all(|invite| match unmatched.get_mut(invite.id.as_str()) {
                Some(left) if *left > 0 => {
                    *left -= 1;
                    true
                }
                _ => false,
            })
    }

    fn is_field_invite_signed(&self) -> bool {
        !self.field_invites.is_empty()
            && self
                .field_invites
                .iter()
                .all(|invite| invite.status == FieldInviteStatus::Fulfilled)
    }
}
