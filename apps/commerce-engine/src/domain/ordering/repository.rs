//! Order Repository Trait
//!
//! Defines the persistence abstraction for the order history.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::errors::OrderError;
use super::order::Order;

/// Repository trait for the append-only order history.
///
/// The store owns the order list exclusively: orders are appended at
/// checkout, read back for analytics, and cleared wholesale on logout.
/// `list` returns orders in append order.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Append a placed order to the history.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn append(&self, order: &Order) -> Result<(), OrderError>;

    /// Load the full order history in append order.
    ///
    /// # Errors
    ///
    /// Returns error if the store cannot be read.
    async fn list(&self) -> Result<Vec<Order>, OrderError>;

    /// Clear the entire history.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn clear(&self) -> Result<(), OrderError>;
}
