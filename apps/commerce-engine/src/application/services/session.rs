//! Session state: the signed-in user and their cart.

use crate::application::ports::AuthenticatedUser;
use crate::domain::ordering::{Cart, OrderError, OrderRepository};

/// Working state of one dashboard session.
///
/// Holds the signed-in user and the cart. Signing out clears the user, the
/// cart, and the order history, which the session owns wholesale.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<AuthenticatedUser>,
    cart: Cart,
}

impl Session {
    /// Create a signed-out session with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&AuthenticatedUser> {
        self.user.as_ref()
    }

    /// Returns true when a user is signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Read access to the cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access to the cart.
    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Attach a signed-in user to the session.
    pub fn sign_in(&mut self, user: AuthenticatedUser) {
        tracing::debug!(username = %user.username, "session started");
        self.user = Some(user);
    }

    /// Sign out: clears the user, the cart, and the order history.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the order history cannot be cleared;
    /// the in-memory session state is cleared regardless.
    pub async fn sign_out<R: OrderRepository>(&mut self, orders: &R) -> Result<(), OrderError> {
        if let Some(user) = self.user.take() {
            tracing::info!(username = %user.username, "user signed out");
        }
        self.cart.clear();
        orders.clear().await
    }
}
