//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Token storage failure
    #[error("Token storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<shared::ApiError> for ClientError {
    fn from(err: shared::ApiError) -> Self {
        match err {
            shared::ApiError::Unauthorized => Self::Unauthorized,
            shared::ApiError::Forbidden { message } => Self::Forbidden(message),
            shared::ApiError::NotFound { resource } => Self::NotFound(resource),
            shared::ApiError::Validation { message } | shared::ApiError::Invalid { message } => {
                Self::Validation(message)
            }
            shared::ApiError::Conflict { resource } => Self::Validation(resource),
            shared::ApiError::Internal { message } => Self::Internal(message),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
