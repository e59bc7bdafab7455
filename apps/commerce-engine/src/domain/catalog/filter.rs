//! Client-side catalog filtering.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::domain::shared::Money;

/// Upper bound of the default price range.
pub const DEFAULT_PRICE_CAP: Decimal = dec!(10000);

/// Filter state for the product list.
///
/// Matching rules:
/// - empty query matches everything, otherwise case-insensitive substring
///   match on the title;
/// - empty category matches everything, otherwise exact match;
/// - price must fall inside the inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Free-text search over product titles.
    pub query: String,
    /// Selected category slug; empty selects all categories.
    pub category: String,
    /// Inclusive lower price bound (USD).
    pub min_price: Money,
    /// Inclusive upper price bound (USD).
    pub max_price: Money,
}

impl CatalogFilter {
    /// Filter with no query, no category, and the default price range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            min_price: Money::ZERO,
            max_price: Money::new(DEFAULT_PRICE_CAP),
        }
    }

    /// Set the search query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the inclusive price range.
    #[must_use]
    pub const fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Reset to the cleared state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Check whether a single product passes the filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_query = self.query.is_empty()
            || product
                .title
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        let matches_category = self.category.is_empty() || product.category == self.category;
        let matches_price = product.price >= self.min_price && product.price <= self.max_price;
        matches_query && matches_category && matches_price
    }

    /// Apply the filter to a product list, preserving catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::ProductId;
    use rust_decimal_macros::dec;

    fn product(id: u64, title: &str, category: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: "desc".to_string(),
            price: Money::new(price),
            discount_percentage: dec!(0),
            stock: 5,
            brand: None,
            category: category.to_string(),
            thumbnail: String::new(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Red Lipstick", "beauty", dec!(12.99)),
            product(2, "Laptop Sleeve", "accessories", dec!(24.50)),
            product(3, "Gaming Laptop", "laptops", dec!(1299.00)),
        ]
    }

    #[test]
    fn cleared_filter_matches_everything() {
        let filter = CatalogFilter::new();
        assert_eq!(filter.apply(&catalog()).len(), 3);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let filter = CatalogFilter::new().with_query("LAPTOP");
        let items = catalog();
        let hits = filter.apply(&items);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Laptop Sleeve");
    }

    #[test]
    fn category_is_exact_match() {
        let filter = CatalogFilter::new().with_category("beauty");
        let items = catalog();
        let hits = filter.apply(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId::new(1));
    }

    #[test]
    fn price_range_is_inclusive() {
        let filter = CatalogFilter::new()
            .with_price_range(Money::new(dec!(12.99)), Money::new(dec!(24.50)));
        assert_eq!(filter.apply(&catalog()).len(), 2);
    }

    #[test]
    fn default_cap_excludes_expensive_items() {
        let filter =
            CatalogFilter::new().with_price_range(Money::ZERO, Money::new(dec!(100)));
        let items = catalog();
        let hits = filter.apply(&items);
        assert!(hits.iter().all(|p| p.title != "Gaming Laptop"));
    }

    #[test]
    fn filters_combine() {
        let filter = CatalogFilter::new()
            .with_query("laptop")
            .with_category("laptops");
        let items = catalog();
        let hits = filter.apply(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId::new(3));
    }

    #[test]
    fn clear_resets_to_default() {
        let mut filter = CatalogFilter::new()
            .with_query("laptop")
            .with_category("laptops")
            .with_price_range(Money::ZERO, Money::new(dec!(50)));
        filter.clear();
        assert_eq!(filter, CatalogFilter::default());
    }
}
