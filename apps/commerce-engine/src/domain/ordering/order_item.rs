//! Order line within a placed order.

use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use crate::domain::shared::{Money, ProductId, Quantity};

/// One product line inside an order, snapshotted at checkout time.
///
/// Invariants: `quantity >= 1` and `price >= 0`, enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_id: ProductId,
    title: String,
    price: Money,
    quantity: Quantity,
    category: Option<String>,
    thumbnail: String,
}

impl OrderItem {
    /// Create an order line.
    ///
    /// # Errors
    ///
    /// Returns error if the quantity is zero or the price is negative.
    pub fn new(
        product_id: ProductId,
        title: impl Into<String>,
        price: Money,
        quantity: Quantity,
        category: Option<String>,
        thumbnail: impl Into<String>,
    ) -> Result<Self, OrderError> {
        if quantity.is_zero() {
            return Err(OrderError::InvalidItem {
                field: "quantity".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if price.is_negative() {
            return Err(OrderError::InvalidItem {
                field: "price".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(Self {
            product_id,
            title: title.into(),
            price,
            quantity,
            category,
            thumbnail: thumbnail.into(),
        })
    }

    /// Get the product identifier.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Get the product title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the unit price (USD).
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get the category, if the product carried one.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Get the thumbnail URL.
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity.count()
    }
}
