//! DummyJSON-specific error types.

use thiserror::Error;

use crate::application::ports::{AuthError, CatalogError};

/// Errors from the DummyJSON adapter.
#[derive(Debug, Error, Clone)]
pub enum ApiError {
    /// Request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("API error: {status} - {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the API body, when one was provided.
        message: String,
    },

    /// The login endpoint rejected the credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<ApiError> for CatalogError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(message) => Self::Unreachable { message },
            other => Self::Service {
                message: other.to_string(),
            },
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidCredentials => Self::InvalidCredentials,
            other => Self::Service {
                message: other.to_string(),
            },
        }
    }
}
