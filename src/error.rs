//! Error types for the SignNow SDK.
//!
//! This module provides a unified error type for all SDK operations,
//! with the error details reported by the SignNow API.

use crate::convert::ConvertError;
use thiserror::Error;

/// Result type for SignNow operations.
pub type Result<T> = std::result::Result<T, SignNowError>;

/// Errors that can occur when using the SignNow SDK.
#[derive(Error, Debug)]
pub enum SignNowError {
    /// API error from the SignNow service.
    #[error("API error ({status_code}): [{code}] {message}")]
    Api {
        /// Error code from the API (0 when the body carried none).
        code: i64,
        /// Human-readable error message.
        message: String,
        /// HTTP status code.
        status_code: u16,
    },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A successful response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A wire value was rejected by one of the converters.
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Authentication error.
    #[error("Unauthorized: invalid or expired access token")]
    Unauthorized,

    /// Rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid request, rejected before anything was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Reading a local file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SignNowError {
    /// Returns true if this is a retryable error.
    pub fn is_retryable(&self) -> bool {
        match self {
            SignNowError::RateLimited => true,
            SignNowError::Http(_) => true,
            SignNowError::Api { status_code, .. } => *status_code >= 500,
            _ => false,
        }
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            SignNowError::Unauthorized
                | SignNowError::Api { status_code: 401, .. }
                | SignNowError::Api { status_code: 403, .. }
        )
    }

    /// Returns the HTTP status code if available.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SignNowError::Api { status_code, .. } => Some(*status_code),
            SignNowError::Unauthorized => Some(401),
            SignNowError::RateLimited => Some(429),
            _ => None,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SignNowError::InvalidRequest(message.into())
    }
}
