//! Login Use Case

use std::sync::Arc;

use crate::application::ports::{AuthError, AuthPort, AuthenticatedUser, Credentials};

/// Use case for signing a user in against the identity provider.
pub struct LoginUseCase<A>
where
    A: AuthPort,
{
    auth: Arc<A>,
}

impl<A> LoginUseCase<A>
where
    A: AuthPort,
{
    /// Create a new LoginUseCase.
    pub fn new(auth: Arc<A>) -> Self {
        Self { auth }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns the auth adapter's error when the sign-in fails.
    pub async fn execute(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthenticatedUser, AuthError> {
        match self.auth.login(credentials).await {
            Ok(user) => {
                tracing::info!(username = %user.username, "user signed in");
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(username = %credentials.username, error = %e, "sign-in failed");
                Err(e)
            }
        }
    }
}
