//! User and invite operations.
//!
//! This module provides the UsersClient for reading the current account and
//! for sending and cancelling signing invites on its documents.

use crate::client::{Client, require_id};
use crate::error::Result;
use crate::types::{InviteResponse, SignInvite, User};
use serde::Serialize;

/// Client for user and invite operations.
///
/// Access via `client.users()`.
pub struct UsersClient {
    client: Client,
}

impl UsersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get the user the access token belongs to.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signnow::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("access_token");
    ///
    ///     let user = client.users().current().await?;
    ///     println!("Signed in as {} (active: {})", user.email, user.active);
    ///     Ok(())
    /// }
    /// ```
    pub async fn current(&self) -> Result<User> {
        self.client.get("/user").await
    }

    /// Send a signing invite for a document.
    ///
    /// The invite is validated locally first; an invalid recipient or an
    /// empty document id fails with `InvalidRequest` without a request.
    ///
    /// # Arguments
    ///
    /// * `document_id` - The document to be signed
    /// * `invite` - A freeform or role-based invite
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signnow::{Client, FreeformInviteRequest};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("access_token");
    ///
    ///     let invite = FreeformInviteRequest {
    ///         from: Some("owner@example.com".to_string()),
    ///         subject: Some("Please sign the NDA".to_string()),
    ///         ..FreeformInviteRequest::new("signer@example.com")
    ///     };
    ///     let response = client.users().create_invite("document_id", &invite.into()).await?;
    ///     println!("Invite id: {:?}", response.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_invite(
        &self,
        document_id: &str,
        invite: &SignInvite,
    ) -> Result<InviteResponse> {
        let document_id = require_id(document_id, "document id")?;
        invite.validate()?;

        self.client
            .post(&format!("/document/{}/invite", document_id), invite)
            .await
    }

    /// Cancel a freeform invite.
    ///
    /// # Arguments
    ///
    /// * `invite_id` - The id returned by [`UsersClient::create_invite`]
    pub async fn cancel_invite(&self, invite_id: &str) -> Result<()> {
        let invite_id = require_id(invite_id, "invite id")?;
        self.client
            .put::<()>(&format!("/invite/{}/cancel", invite_id), None)
            .await
    }

    /// Cancel all role-based invites of a document.
    ///
    /// # Arguments
    ///
    /// * `document_id` - The document whose field invites are cancelled
    /// * `reason` - Optional reason shown to the signers
    pub async fn cancel_field_invites(&self, document_id: &str, reason: Option<&str>) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            reason: &'a str,
        }

        let document_id = require_id(document_id, "document id")?;
        let body = reason.map(|reason| Request { reason });

        self.client
            .put(
                &format!("/document/{}/fieldinvitecancel", document_id),
                body.as_ref(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignNowError;
    use crate::types::FreeformInviteRequest;

    #[tokio::test]
    async fn test_create_invite_rejects_empty_document_id() {
        let client = Client::new("test_token");
        let invite = SignInvite::from(FreeformInviteRequest::new("signer@example.com"));

        let err = client.users().create_invite("  ", &invite).await.unwrap_err();
        assert!(matches!(err, SignNowError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_cancel_invite_rejects_empty_id() {
        let client = Client::new("test_token");
        let err = client.users().cancel_invite("").await.unwrap_err();
        assert!(matches!(err, SignNowError::InvalidRequest(_)));
    }
}
