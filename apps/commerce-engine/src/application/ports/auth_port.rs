//! Auth Port (Driven Port)
//!
//! Interface for authenticating a user against the upstream identity
//! provider. Token handling is opaque: the engine stores and forwards the
//! token without interpreting it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Login credentials entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Create credentials from username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// A signed-in user as returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Upstream user id.
    pub id: u64,
    /// Username.
    pub username: String,
    /// Opaque access token.
    pub token: String,
}

/// Errors from the auth adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The provider rejected the credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The provider could not be reached or answered abnormally.
    #[error("Auth service error: {message}")]
    Service {
        /// Underlying failure description.
        message: String,
    },
}

/// Port for the upstream identity provider.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchange credentials for an authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] on rejection, or
    /// [`AuthError::Service`] when the provider fails.
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_new() {
        let creds = Credentials::new("emilys", "emilyspass");
        assert_eq!(creds.username, "emilys");
        assert_eq!(creds.password, "emilyspass");
    }

    #[test]
    fn auth_error_display() {
        assert_eq!(format!("{}", AuthError::InvalidCredentials), "Invalid credentials");
        let err = AuthError::Service {
            message: "timeout".to_string(),
        };
        assert!(format!("{err}").contains("timeout"));
    }
}
