//! In-memory order repository.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ordering::{Order, OrderError, OrderRepository};

/// In-memory implementation of [`OrderRepository`].
///
/// The history is an insertion-ordered list, matching the append-only
/// contract. Suitable for tests and sessions without a storage path.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Get the number of orders in the repository.
    ///
    /// # Panics
    ///
    /// Panics if the inner lock is poisoned.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn len(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn append(&self, order: &Order) -> Result<(), OrderError> {
        let mut orders = self.orders.write().map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })?;
        orders.push(order.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })?;
        Ok(orders.clone())
    }

    async fn clear(&self) -> Result<(), OrderError> {
        let mut orders = self.orders.write().map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })?;
        orders.clear();
        Ok(())
    }
}
