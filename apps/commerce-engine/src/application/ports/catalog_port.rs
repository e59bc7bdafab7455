//! Catalog Port (Driven Port)
//!
//! Interface for reading the remote product catalog.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{Category, Product};

/// Errors from the catalog adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog service could not be reached.
    #[error("Catalog unreachable: {message}")]
    Unreachable {
        /// Underlying failure description.
        message: String,
    },

    /// The catalog answered with an unexpected payload or status.
    #[error("Catalog error: {message}")]
    Service {
        /// Underlying failure description.
        message: String,
    },
}

/// Port for the remote product catalog.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Fetch the product list.
    ///
    /// # Errors
    ///
    /// Returns error if the catalog cannot be fetched or decoded.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch the category list.
    ///
    /// # Errors
    ///
    /// Returns error if the catalog cannot be fetched or decoded.
    async fn categories(&self) -> Result<Vec<Category>, CatalogError>;
}
