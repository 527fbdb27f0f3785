//! # SignNow Rust SDK
//!
//! Typed Rust client for the SignNow e-signature REST API.
//!
//! Documents are uploaded, sent out for signing through freeform or
//! role-based invites, and inspected once signers act on them. A fetched
//! [`SignNowDocument`] reports its overall [`SignStatus`] from its invites
//! and signatures.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signnow::{Client, FreeformInviteRequest, SignStatus};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads SIGNNOW_ACCESS_TOKEN (and optionally SIGNNOW_API_BASE_URL)
//!     let client = Client::from_env()?;
//!
//!     let uploaded = client.documents().upload_file("contract.pdf").await?;
//!
//!     let invite = FreeformInviteRequest {
//!         from: Some("owner@example.com".to_string()),
//!         ..FreeformInviteRequest::new("signer@example.com")
//!     };
//!     client.users().create_invite(&uploaded.id, &invite.into()).await?;
//!
//!     let document = client.documents().get(&uploaded.id).await?;
//!     assert_eq!(document.status(), SignStatus::Pending);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, SignNowError>`:
//!
//! ```rust,no_run
//! use signnow::{Client, SignNowError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("access_token");
//!
//!     match client.documents().get("document_id").await {
//!         Ok(document) => println!("{}: {}", document.name, document.status()),
//!         Err(SignNowError::Unauthorized) => println!("Access token expired"),
//!         Err(e) if e.is_retryable() => println!("Try again later: {}", e),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

pub mod client;
pub mod convert;
pub mod document;
pub mod documents;
pub mod error;
pub mod fields;
pub mod types;
pub mod users;

// Re-export main types at the crate root
pub use client::{Client, ClientConfig, EVAL_BASE_URL, PRODUCTION_BASE_URL};
pub use convert::ConvertError;
pub use document::{FieldInvite, FieldInviteStatus, FreeformInvite, SignNowDocument, SignStatus};
pub use error::{Result, SignNowError};
pub use fields::{
    Field, FieldType, FieldValue, Hyperlink, HyperlinkField, Role, Signature, TextField,
};
pub use types::{
    FreeformInviteRequest, InviteRecipient, InviteResponse, RoleBasedInviteRequest, SignInvite,
    SigningLink, UploadResponse, User,
};
