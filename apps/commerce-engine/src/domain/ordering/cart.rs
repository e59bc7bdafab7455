//! Shopping cart state.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Product;
use crate::domain::shared::{Money, ProductId, Quantity};

/// One product line in the cart, snapshotted from the catalog at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog identifier of the product.
    pub product_id: ProductId,
    /// Product title at add time.
    pub title: String,
    /// Unit price at add time (USD).
    pub price: Money,
    /// Units of this product in the cart.
    pub quantity: Quantity,
    /// Category at add time, when the catalog provided one.
    pub category: Option<String>,
    /// Thumbnail URL at add time.
    pub thumbnail: String,
}

/// The shopping cart: an ordered list of product lines.
///
/// Adding a product already in the cart increments its quantity instead of
/// creating a second line. Line order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// An existing line for the same product gains one unit; otherwise a new
    /// line is appended with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity = item.quantity.increment();
        } else {
            self.items.push(CartItem {
                product_id: product.id,
                title: product.title.clone(),
                price: product.price,
                quantity: Quantity::ONE,
                category: product.category_opt(),
                thumbnail: product.thumbnail.clone(),
            });
        }
    }

    /// Remove a product line entirely.
    pub fn remove(&mut self, product_id: ProductId) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero removes the line; unknown product ids are ignored.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: Quantity) {
        if quantity.is_zero() {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart total: sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .map(|i| i.price * i.quantity.count())
            .sum()
    }

    /// Number of distinct product lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
