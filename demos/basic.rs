//! Basic usage example for the SignNow SDK.
//!
//! This example demonstrates:
//! - Creating a client from the environment
//! - Uploading a document
//! - Sending and cancelling a freeform invite
//! - Reading the document's signing status
//!
//! Run with:
//! ```bash
//! SIGNNOW_ACCESS_TOKEN=... SIGNNOW_API_BASE_URL=https://api-eval.signnow.com \
//! SIGNER_EMAIL=signer@example.com cargo run --example basic -- contract.pdf
//! ```

use signnow::{Client, FreeformInviteRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let file = std::env::args()
        .nth(1)
        .expect("usage: basic <path-to-document>");
    let signer = std::env::var("SIGNER_EMAIL").expect("SIGNER_EMAIL environment variable required");

    println!("Creating SignNow client...");
    let client = Client::from_env()?;

    let user = client.users().current().await?;
    println!("Signed in as {} (active: {})", user.email, user.active);

    println!("\nUploading {}...", file);
    let uploaded = client.documents().upload_file(&file).await?;
    println!("Document id: {}", uploaded.id);

    println!("\nInviting {} to sign...", signer);
    let invite = FreeformInviteRequest {
        from: Some(user.email.clone()),
        subject: Some("Please sign this document".to_string()),
        ..FreeformInviteRequest::new(&signer)
    };
    let response = client
        .users()
        .create_invite(&uploaded.id, &invite.into())
        .await?;
    println!("Invite id: {:?}", response.id);

    let document = client.documents().get(&uploaded.id).await?;
    println!("\nDocument:");
    println!("  Name:    {}", document.name);
    println!("  Pages:   {}", document.page_count);
    if let Some(created) = document.created {
        println!("  Created: {}", created);
    }
    println!("  Status:  {}", document.status());

    if let Some(invite_id) = response.id {
        println!("\nCancelling invite...");
        client.users().cancel_invite(&invite_id).await?;
    }

    println!("\nCleaning up - deleting document...");
    client.documents().delete(&uploaded.id).await?;

    println!("\nDone!");
    Ok(())
}
