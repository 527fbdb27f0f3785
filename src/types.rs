//! Request and response types for the SignNow SDK.
//!
//! Document models live in [`crate::document`] and [`crate::fields`]; this
//! module holds users, invites and the small payloads exchanged with the API.

use crate::convert::{string_bool, string_uri, unix_timestamp};
use crate::error::{Result, SignNowError};
use crate::fields::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A SignNow user account.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Primary email address.
    #[serde(rename = "primary_email")]
    pub email: String,
    /// All email addresses attached to the account.
    #[serde(default)]
    pub emails: Vec<String>,
    /// Whether the account is activated.
    #[serde(with = "string_bool")]
    pub active: bool,
    /// Registration timestamp.
    #[serde(with = "unix_timestamp")]
    pub created: DateTime<Utc>,
}

/// Response to a document upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadResponse {
    /// Identifier of the new document.
    pub id: String,
}

/// Links that open a document for signing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SigningLink {
    /// Link that requires a SignNow login.
    #[serde(with = "string_uri")]
    pub url: Url,
    /// Link that lets the signer sign without an account.
    #[serde(with = "string_uri")]
    pub url_no_signup: Url,
}

/// A freeform signing invite: the recipient may sign anywhere on the document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FreeformInviteRequest {
    /// Recipient email.
    pub to: String,
    /// Sender email. Required by the API unless the account has a default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Carbon-copy recipients.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FreeformInviteRequest {
    /// Invite `to` with no sender, subject or message.
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ..Default::default()
        }
    }
}

/// One signer of a role-based invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteRecipient {
    /// Signer email.
    pub email: String,
    /// Role name as defined on the document.
    pub role: String,
    /// Role identifier as defined on the document.
    pub role_id: String,
    /// Signing order.
    pub order: i64,
}

impl InviteRecipient {
    /// Assign `email` to a role of the document.
    pub fn for_role(role: &Role, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: role.name.clone(),
            role_id: role.unique_id.clone(),
            order: role.signing_order,
        }
    }
}

/// A role-based signing invite: each recipient fills the fields of a role.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleBasedInviteRequest {
    pub to: Vec<InviteRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A signing invite to send for a document.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SignInvite {
    Freeform(FreeformInviteRequest),
    RoleBased(RoleBasedInviteRequest),
}

impl SignInvite {
    /// Reject invites the API would refuse, before sending anything.
    pub fn validate(&self) -> Result<()> {
        match self {
            SignInvite::Freeform(invite) => {
                require_email(&invite.to, "invite recipient")?;
                optional_email(invite.from.as_deref())?;
                invite.cc.iter().try_for_each(|cc| require_email(cc, "cc recipient"))
            }
            SignInvite::RoleBased(invite) => {
                if invite.to.is_empty() {
                    return Err(SignNowError::invalid(
                        "role-based invite needs at least one recipient",
                    ));
                }
                for recipient in &invite.to {
                    require_email(&recipient.email, "invite recipient")?;
                    if recipient.role_id.trim().is_empty() {
                        return Err(SignNowError::invalid(format!(
                            "recipient {} has no role_id",
                            recipient.email
                        )));
                    }
                }
                optional_email(invite.from.as_deref())?;
                invite.cc.iter().try_for_each(|cc| require_email(cc, "cc recipient"))
            }
        }
    }
}

impl From<FreeformInviteRequest> for SignInvite {
    fn from(invite: FreeformInviteRequest) -> Self {
        SignInvite::Freeform(invite)
    }
}

impl From<RoleBasedInviteRequest> for SignInvite {
    fn from(invite: RoleBasedInviteRequest) -> Self {
        SignInvite::RoleBased(invite)
    }
}

/// Response to an invite request.
///
/// Freeform invites return the new invite `id`; role-based invites only
/// return a status.
#[derive(Debug, Clone, Deserialize)]
pub struct InviteResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, alias = "result")]
    pub status: Option<String>,
}

fn require_email(value: &str, what: &str) -> Result<()> {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(SignNowError::invalid(format!(
            "{what} is not a valid email: {value:?}"
        ))),
    }
}

fn optional_email(value: Option<&str>) -> Result<()> {
    value.map_or(Ok(()), |email| require_email(email, "invite sender"))
}
