//! JSON-file order repository.
//!
//! Persists the order history as a single JSON document, rewritten on every
//! mutation (the same whole-list snapshot model a browser store keeps in
//! local storage). Good for one local session; not for concurrent writers.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ordering::{Order, OrderError, OrderRepository};

/// File-backed implementation of [`OrderRepository`].
#[derive(Debug)]
pub struct JsonFileOrderRepository {
    path: PathBuf,
    cache: RwLock<Vec<Order>>,
}

impl JsonFileOrderRepository {
    /// Open a repository at the given path, loading any existing history.
    ///
    /// A missing file is an empty history; it is created on first append.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file exists but cannot be read or
    /// parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, OrderError> {
        let path = path.into();
        let orders = Self::load(&path)?;
        Ok(Self {
            path,
            cache: RwLock::new(orders),
        })
    }

    fn load(path: &Path) -> Result<Vec<Order>, OrderError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| OrderError::Storage {
            message: format!("read {}: {e}", path.display()),
        })?;
        serde_json::from_str(&raw).map_err(|e| OrderError::Storage {
            message: format!("parse {}: {e}", path.display()),
        })
    }

    fn persist(&self, orders: &[Order]) -> Result<(), OrderError> {
        let json = serde_json::to_string_pretty(orders).map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json).map_err(|e| OrderError::Storage {
            message: format!("write {}: {e}", self.path.display()),
        })
    }
}

#[async_trait]
impl OrderRepository for JsonFileOrderRepository {
    async fn append(&self, order: &Order) -> Result<(), OrderError> {
        let mut cache = self.cache.write().map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })?;
        cache.push(order.clone());
        self.persist(&cache)
    }

    async fn list(&self) -> Result<Vec<Order>, OrderError> {
        let cache = self.cache.read().map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })?;
        Ok(cache.clone())
    }

    async fn clear(&self) -> Result<(), OrderError> {
        let mut cache = self.cache.write().map_err(|e| OrderError::Storage {
            message: e.to_string(),
        })?;
        cache.clear();
        self.persist(&cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::{CreateOrderCommand, OrderItem};
    use crate::domain::shared::{Money, ProductId, Quantity};
    use rust_decimal_macros::dec;

    fn create_test_order() -> Order {
        Order::new(CreateOrderCommand {
            items: vec![
                OrderItem::new(
                    ProductId::new(1),
                    "Lipstick",
                    Money::new(dec!(9.99)),
                    Quantity::new(2),
                    Some("beauty".to_string()),
                    "thumb.png",
                )
                .unwrap(),
            ],
            shipping: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileOrderRepository::open(dir.path().join("orders.json")).unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn history_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        let order = create_test_order();

        {
            let repo = JsonFileOrderRepository::open(&path).unwrap();
            repo.append(&order).await.unwrap();
        }

        let reopened = JsonFileOrderRepository::open(&path).unwrap();
        let listed = reopened.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), order.id());
        assert_eq!(listed[0].total(), Money::new(dec!(19.98)));
    }

    #[tokio::test]
    async fn clear_rewrites_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");

        let repo = JsonFileOrderRepository::open(&path).unwrap();
        repo.append(&create_test_order()).await.unwrap();
        repo.clear().await.unwrap();

        let reopened = JsonFileOrderRepository::open(&path).unwrap();
        assert!(reopened.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_surfaces_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, "not json").unwrap();

        let result = JsonFileOrderRepository::open(&path);
        assert!(matches!(result, Err(OrderError::Storage { .. })));
    }

    #[tokio::test]
    async fn list_preserves_append_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileOrderRepository::open(dir.path().join("orders.json")).unwrap();

        let first = create_test_order();
        let second = create_test_order();
        repo.append(&first).await.unwrap();
        repo.append(&second).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].id(), first.id());
        assert_eq!(listed[1].id(), second.id());
    }
}
