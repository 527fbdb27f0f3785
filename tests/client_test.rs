//! Integration tests for the SignNow client.

use signnow::{Client, ClientConfig, SignNowError, User};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: &str) -> Client {
    Client::with_config(
        token,
        ClientConfig {
            base_url: Some(server.uri()),
            ..Default::default()
        },
    )
}

fn mock_user() -> serde_json::Value {
    serde_json::json!({
        "id": "40204b3344984733bb16d61f8550f8b5edfd719b",
        "first_name": "Jane",
        "last_name": "Doe",
        "active": "1",
        "primary_email": "jane.doe@example.com",
        "emails": ["jane.doe@example.com"],
        "created": "1560000000"
    })
}

#[tokio::test]
async fn test_client_creation() {
    let client = Client::new("test_token");
    assert!(client.base_url().starts_with("https://"));
}

#[tokio::test]
async fn test_client_with_custom_config() {
    let client = Client::with_config(
        "test_token",
        ClientConfig {
            base_url: Some("https://api-eval.signnow.com".to_string()),
            timeout: Some(Duration::from_secs(60)),
            user_agent: Some("test-agent/1.0".to_string()),
        },
    );
    assert_eq!(client.base_url(), "https://api-eval.signnow.com");
}

#[tokio::test]
async fn test_get_request_with_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("Authorization", "Bearer test_token"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_user()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test_token");
    let user: User = client.users().current().await.unwrap();

    assert_eq!(user.email, "jane.doe@example.com");
    assert!(user.active);
    assert_eq!(user.first_name.as_deref(), Some("Jane"));
}

#[tokio::test]
async fn test_unauthorized_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_token",
            "code": 1537
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "expired_token");
    let err = client.users().current().await.unwrap_err();

    assert!(matches!(err, SignNowError::Unauthorized));
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_rate_limited_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test_token");
    let err = client.users().current().await.unwrap_err();

    assert!(matches!(err, SignNowError::RateLimited));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_api_error_parsing() {
    let mock_server = MockServer::start().await;
    let document_id = "0123456789abcdef0123456789abcdef01234567";

    Mock::given(method("GET"))
        .and(path(format!("/document/{}", document_id)))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errors": [{
                "code": 65582,
                "message": "Document not found"
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test_token");
    let result = client.documents().get(document_id).await;

    match result {
        Err(SignNowError::Api {
            code,
            message,
            status_code,
        }) => {
            assert_eq!(code, 65582);
            assert_eq!(message, "Document not found");
            assert_eq!(status_code, 404);
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unparsable_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>Bad gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test_token");
    let err = client.users().current().await.unwrap_err();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.is_retryable());
    assert!(err.to_string().contains("Unknown error"));
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "u1",
            "primary_email": "jane.doe@example.com",
            "active": "maybe",
            "created": "1560000000"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, "test_token");
    let err = client.users().current().await.unwrap_err();

    assert!(matches!(err, SignNowError::Decode(ref msg) if msg.contains("invalid boolean")));
}
