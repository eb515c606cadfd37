//! API Error Types
//!
//! Errors raised by the gateway client. A 401 from the backend surfaces as
//! [`ApiError::AuthenticationExpired`] after the session has been torn down;
//! views narrow that case to [`SessionExpired`] so the caller can redirect.

use thiserror::Error;

/// Gateway error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Could not connect to the backend
    #[error("Backend unavailable")]
    Unavailable,

    /// The backend did not answer in time
    #[error("Request timeout")]
    Timeout,

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx answer other than 401
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The backend rejected the stored credentials (HTTP 401)
    #[error("Session expired; please sign in again")]
    AuthenticationExpired,

    /// The body could not be decoded into the expected record
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a transport error the way the rest of the client expects
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unavailable
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Request(err)
        }
    }

    pub fn is_authentication_expired(&self) -> bool {
        matches!(self, ApiError::AuthenticationExpired)
    }

    /// HTTP status of the failed call, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::AuthenticationExpired => Some(401),
            _ => None,
        }
    }
}

/// Result type for gateway operations
pub type ApiResult<T> = Result<T, ApiError>;

/// The session is gone and the operator must sign in again
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Session expired; please sign in again")]
pub struct SessionExpired;

impl ApiError {
    /// Split off the session-expiry case: `Err` for expiry, `Ok` for anything else
    pub fn into_recoverable(self) -> Result<ApiError, SessionExpired> {
        match self {
            ApiError::AuthenticationExpired => Err(SessionExpired),
            other => Ok(other),
        }
    }
}
