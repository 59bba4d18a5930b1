//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (connection refused, DNS, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the service
    ///
    /// Status codes are passed through verbatim; this crate does not
    /// interpret them further.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request payload failed client-side validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The HTTP status, when the service responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// A message suitable for showing to the administrator
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Classify into the framework's unified error space
    ///
    /// For display and logging only; nothing in this crate or its
    /// consumers branches on the classification, and the raw status stays
    /// attached as a detail.
    pub fn to_app_error(&self) -> AppError {
        match self {
            ClientError::Api { status, message } => {
                let code = match *status {
                    401 => ErrorCode::NotAuthenticated,
                    403 => ErrorCode::PermissionDenied,
                    404 => ErrorCode::NotFound,
                    409 => ErrorCode::AlreadyExists,
                    422 => ErrorCode::ValidationFailed,
                    400 => ErrorCode::InvalidRequest,
                    503 | 504 => ErrorCode::NetworkError,
                    _ => ErrorCode::InternalError,
                };
                AppError::with_message(code, message.clone()).with_detail("status", *status)
            }
            ClientError::Http(_) => AppError::network(self.to_string()),
            ClientError::Validation(msg) => AppError::validation(msg.clone()),
            ClientError::InvalidResponse(_) | ClientError::Serialization(_) => {
                AppError::with_message(ErrorCode::SerializationError, self.to_string())
            }
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
