//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, ProductId};

/// A product as served by the catalog API.
///
/// Prices are unit prices in the source currency (USD). The record is
/// read-only on this side; catalog mutations belong to the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Unit price (USD).
    pub price: Money,
    /// Discount percentage (0-100).
    pub discount_percentage: rust_decimal::Decimal,
    /// Units in stock.
    pub stock: u32,
    /// Brand name, when the catalog provides one.
    pub brand: Option<String>,
    /// Category slug.
    pub category: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
}

impl Product {
    /// Category as an optional value: `None` when the catalog left it empty.
    #[must_use]
    pub fn category_opt(&self) -> Option<String> {
        if self.category.is_empty() {
            None
        } else {
            Some(self.category.clone())
        }
    }
}
