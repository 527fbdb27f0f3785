//! Integration tests for user and invite operations.

use signnow::{
    Client, ClientConfig, FreeformInviteRequest, InviteRecipient, Role, RoleBasedInviteRequest,
    SignInvite, SignNowError,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOCUMENT_ID: &str = "0123456789abcdef0123456789abcdef01234567";
const INVITE_ID: &str = "a1b2c3d4e5f6a7b8c9d0a1b2c3d4e5f6a7b8c9d0";

fn client_for(server: &MockServer) -> Client {
    Client::with_config(
        "test_token",
        ClientConfig {
            base_url: Some(server.uri()),
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn test_create_freeform_invite() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/document/{}/invite", DOCUMENT_ID)))
        .and(body_json(serde_json::json!({
            "to": "signer@example.com",
            "from": "owner@example.com",
            "subject": "Please sign"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "success",
            "id": INVITE_ID
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let invite = FreeformInviteRequest {
        from: Some("owner@example.com".to_string()),
        subject: Some("Please sign".to_string()),
        ..FreeformInviteRequest::new("signer@example.com")
    };

    let response = client
        .users()
        .create_invite(DOCUMENT_ID, &invite.into())
        .await
        .unwrap();

    assert_eq!(response.id.as_deref(), Some(INVITE_ID));
    assert_eq!(response.id.unwrap().len(), 40);
    assert_eq!(response.status.as_deref(), Some("success"));
}

#[tokio::test]
async fn test_create_role_based_invite() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/document/{}/invite", DOCUMENT_ID)))
        .and(body_json(serde_json::json!({
            "to": [{
                "email": "signer@example.com",
                "role": "Signer 1",
                "role_id": "role1",
                "order": 1
            }],
            "from": "owner@example.com"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "success" })),
        )
        .mount(&mock_server)
        .await;

    let role = Role {
        unique_id: "role1".to_string(),
        signing_order: 1,
        name: "Signer 1".to_string(),
    };
    let invite = SignInvite::RoleBased(RoleBasedInviteRequest {
        to: vec![InviteRecipient::for_role(&role, "signer@example.com")],
        from: Some("owner@example.com".to_string()),
        ..Default::default()
    });

    let client = client_for(&mock_server);
    let response = client.users().create_invite(DOCUMENT_ID, &invite).await.unwrap();

    assert!(response.id.is_none());
    assert_eq!(response.status.as_deref(), Some("success"));
}

#[tokio::test]
async fn test_invalid_invite_is_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let invite = SignInvite::from(FreeformInviteRequest::new("not-an-email"));
    let err = client
        .users()
        .create_invite(DOCUMENT_ID, &invite)
        .await
        .unwrap_err();

    assert!(matches!(err, SignNowError::InvalidRequest(_)));
}

#[tokio::test]
async fn test_cancel_freeform_invite() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/invite/{}/cancel", INVITE_ID)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "success" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.users().cancel_invite(INVITE_ID).await.unwrap();
}

#[tokio::test]
async fn test_cancel_already_cancelled_invite() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/invite/{}/cancel", INVITE_ID)))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "errors": [{ "code": 65639, "message": "Invite already cancelled" }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.users().cancel_invite(INVITE_ID).await.unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_cancel_field_invites_with_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/document/{}/fieldinvitecancel", DOCUMENT_ID)))
        .and(body_json(serde_json::json!({ "reason": "Wrong version" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "success" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .users()
        .cancel_field_invites(DOCUMENT_ID, Some("Wrong version"))
        .await
        .unwrap();
}
