//! SignNow API client.
//!
//! The main entry point for interacting with the SignNow REST API.

use crate::documents::DocumentsClient;
use crate::error::{Result, SignNowError};
use crate::users::UsersClient;
use reqwest::{Client as HttpClient, Method, RequestBuilder, header, multipart::Form};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Production API host.
pub const PRODUCTION_BASE_URL: &str = "https://api.signnow.com";
/// Evaluation (sandbox) API host.
pub const EVAL_BASE_URL: &str = "https://api-eval.signnow.com";

/// Environment variable holding the OAuth2 access token.
pub const ACCESS_TOKEN_ENV: &str = "SIGNNOW_ACCESS_TOKEN";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "SIGNNOW_API_BASE_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// SignNow API client.
///
/// Cloning is cheap: clones share the same connection pool.
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
///     let uploaded = client.documents().upload_file("contract.pdf").await?;
///     client
///         .users()
///         .create_invite(&uploaded.id, &FreeformInviteRequest::new("signer@example.com").into())
///         .await?;
///
///     let document = client.documents().get(&uploaded.id).await?;
///     println!("{} is {}", document.name, document.status());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    pub(crate) access_token: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API (default: https://api.signnow.com).
    pub base_url: Option<String>,
    /// Request timeout (default: 30 seconds).
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl Client {
    /// Create a new SignNow client with default configuration.
    ///
    /// # Arguments
    ///
    /// * `access_token` - An OAuth2 bearer token for the SignNow API
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_config(access_token, ClientConfig::default())
    }

    /// Create a new SignNow client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use signnow::{Client, ClientConfig, EVAL_BASE_URL};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("access_token", ClientConfig {
    ///     base_url: Some(EVAL_BASE_URL.to_string()),
    ///     timeout: Some(Duration::from_secs(60)),
    ///     user_agent: Some("my-app/1.0".to_string()),
    /// });
    /// ```
    pub fn with_config(access_token: impl Into<String>, config: ClientConfig) -> Self {
        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("signnow-rust/{}", env!("CARGO_PKG_VERSION")));

        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        let base_url = config
            .base_url
            .unwrap_or_else(|| PRODUCTION_BASE_URL.to_string());

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        }
    }

    /// Create a client from `SIGNNOW_ACCESS_TOKEN` and, if set,
    /// `SIGNNOW_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let access_token = lookup(ACCESS_TOKEN_ENV)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| SignNowError::Config(format!("{ACCESS_TOKEN_ENV} is not set")))?;
        let base_url = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty());

        Ok(Self::with_config(
            access_token,
            ClientConfig {
                base_url,
                ..Default::default()
            },
        ))
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the users client for account and invite operations.
    pub fn users(&self) -> UsersClient {
        UsersClient::new(self.clone())
    }

    /// Get the documents client for document operations.
    pub fn documents(&self) -> DocumentsClient {
        DocumentsClient::new(self.clone())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "sending SignNow request");
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.access_token)
            .header(header::ACCEPT, "application/json")
    }

    /// Make an authenticated GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        self.handle_response(response).await
    }

    /// Make an authenticated GET request for a binary body.
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.request(Method::GET, path).send().await?;
        let response = self.check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Make an authenticated multipart POST request.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T> {
        let response = self
            .request(Method::POST, path)
            .multipart(form)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Make an authenticated PUT request, discarding the response body.
    pub(crate) async fn put<B: serde::Serialize>(&self, path: &str, body: Option<&B>) -> Result<()> {
        let mut request = self.request(Method::PUT, path);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.check_status(request.send().await?).await?;
        Ok(())
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        self.check_status(response).await?;
        Ok(())
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = self.check_status(response).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| SignNowError::Decode(e.to_string()))
    }

    async fn check_status(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        tracing::debug!(status = response.status().as_u16(), url = %response.url(), "SignNow response");
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(self.parse_error(response).await)
        }
    }

    async fn parse_error(&self, response: reqwest::Response) -> SignNowError {
        let status = response.status().as_u16();

        if status == 401 {
            return SignNowError::Unauthorized;
        }
        if status == 429 {
            return SignNowError::RateLimited;
        }

        let error: std::result::Result<ApiErrorResponse, _> = response.json().await;
        let (code, message) = match error {
            Ok(body) => body.into_code_and_message(),
            Err(_) => (0, "Unknown error".to_string()),
        };

        tracing::warn!(status, code, %message, "SignNow API error");
        SignNowError::Api {
            code,
            message,
            status_code: status,
        }
    }
}

/// Check a path identifier before building a URL with it.
///
/// SignNow ids are hex strings; anything outside `[A-Za-z0-9_-]` would
/// change the path, query or fragment of the request URL.
pub(crate) fn require_id<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SignNowError::invalid(format!("{what} must not be empty")));
    }
    if let Some(c) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(SignNowError::invalid(format!(
            "{what} contains invalid character {c:?}"
        )));
    }
    Ok(value)
}

/// SignNow reports errors either as a list or as a single `error` string.
#[derive(Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    errors: Vec<ApiErrorEntry>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default, with = "crate::convert::string_int")]
    code: i64,
}

#[derive(Deserialize)]
struct ApiErrorEntry {
    #[serde(default, with = "crate::convert::string_int")]
    code: i64,
    message: String,
}

impl ApiErrorResponse {
    fn into_code_and_message(self) -> (i64, String) {
        if let Some(first) = self.errors.into_iter().next() {
            return (first.code, first.message);
        }
        match self.error {
            Some(message) => (self.code, message),
            None => (self.code, "Unknown error".to_string()),
        }
    }
}
