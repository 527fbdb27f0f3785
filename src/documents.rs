//! Document operations.
//!
//! This module provides the DocumentsClient for uploading, fetching,
//! downloading and deleting documents, and for creating signing links.

use crate::client::{Client, require_id};
use crate::document::SignNowDocument;
use crate::error::{Result, SignNowError};
use crate::types::{SigningLink, UploadResponse};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::path::Path;

/// Client for document operations.
///
/// Access via `client.documents()`.
pub struct DocumentsClient {
    client: Client,
}

impl DocumentsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Upload a document.
    ///
    /// # Arguments
    ///
    /// * `file_name` - File name including extension; SignNow uses the
    ///   extension to detect the format
    /// * `content` - File contents
    pub async fn upload(
        &self,
        file_name: &str,
        content: impl Into<Vec<u8>>,
    ) -> Result<UploadResponse> {
        let content = content.into();
        if file_name.trim().is_empty() {
            return Err(SignNowError::invalid("file name must not be empty"));
        }
        if content.is_empty() {
            return Err(SignNowError::invalid(format!("{file_name} is empty")));
        }

        tracing::debug!(file_name, size = content.len(), "uploading document");
        let part = Part::bytes(content).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        self.client.post_multipart("/document", form).await
    }

    /// Upload a document from a local file.
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
    ///     let uploaded = client.documents().upload_file("contract.pdf").await?;
    ///     println!("Uploaded: {}", uploaded.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<UploadResponse> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| SignNowError::invalid(format!("{} has no file name", path.display())))?;

        let content = tokio::fs::read(path).await?;
        self.upload(file_name, content).await
    }

    /// Get a document with its roles, fields, signatures and invites.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signnow::{Client, SignStatus};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("access_token");
    ///
    ///     let document = client.documents().get("document_id").await?;
    ///     if document.status() == SignStatus::Completed {
    ///         println!("{} is fully signed", document.name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get(&self, document_id: &str) -> Result<SignNowDocument> {
        let document_id = require_id(document_id, "document id")?;
        self.client.get(&format!("/document/{}", document_id)).await
    }

    /// Download a document as a single (collapsed) PDF.
    pub async fn download(&self, document_id: &str) -> Result<Vec<u8>> {
        let document_id = require_id(document_id, "document id")?;
        self.client
            .get_bytes(&format!("/document/{}/download?type=collapsed", document_id))
            .await
    }

    /// Create links that open the document for signing.
    pub async fn create_signing_link(&self, document_id: &str) -> Result<SigningLink> {
        #[derive(Serialize)]
        struct Request<'a> {
            document_id: &'a str,
        }

        let document_id = require_id(document_id, "document id")?;
        self.client.post("/link", &Request { document_id }).await
    }

    /// Delete a document.
    ///
    /// **Warning:** This operation is irreversible.
    pub async fn delete(&self, document_id: &str) -> Result<()> {
        let document_id = require_id(document_id, "document id")?;
        self.client
            .delete(&format!("/document/{}", document_id))
            .await
    }
}
