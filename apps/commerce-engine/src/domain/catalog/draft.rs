//! Product form validation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::shared::DomainError;

/// Unsaved product data entered through the product form.
///
/// `validate` reports every violation at once so a form can surface all
/// field errors in a single pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Product title.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Unit price (USD).
    pub price: Decimal,
    /// Discount percentage (0-100).
    pub discount_percentage: Decimal,
    /// Units in stock.
    pub stock: u32,
    /// Brand name.
    pub brand: String,
    /// Category slug.
    pub category: String,
    /// Thumbnail URL; empty is allowed.
    pub thumbnail: String,
}

impl ProductDraft {
    /// Validate every field, collecting all violations.
    ///
    /// # Errors
    ///
    /// Returns the full list of field violations when any field is invalid.
    pub fn validate(&self) -> Result<(), Vec<DomainError>> {
        let mut issues = Vec::new();

        if self.title.chars().count() < 3 {
            issues.push(DomainError::invalid_value(
                "title",
                "Title must be at least 3 characters",
            ));
        }
        if self.description.chars().count() < 10 {
            issues.push(DomainError::invalid_value(
                "description",
                "Description must be at least 10 characters",
            ));
        }
        if self.price < dec!(0.01) {
            issues.push(DomainError::invalid_value(
                "price",
                "Price must be greater than 0",
            ));
        }
        if self.discount_percentage < Decimal::ZERO {
            issues.push(DomainError::invalid_value(
                "discount_percentage",
                "Discount must be 0 or greater",
            ));
        }
        if self.discount_percentage > dec!(100) {
            issues.push(DomainError::invalid_value(
                "discount_percentage",
                "Discount cannot exceed 100%",
            ));
        }
        if self.brand.is_empty() {
            issues.push(DomainError::invalid_value("brand", "Brand is required"));
        }
        if self.category.is_empty() {
            issues.push(DomainError::invalid_value(
                "category",
                "Category is required",
            ));
        }
        if !self.thumbnail.is_empty() && !is_url(&self.thumbnail) {
            issues.push(DomainError::invalid_value(
                "thumbnail",
                "Must be a valid URL",
            ));
        }

        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }
}

/// Minimal URL shape check: an http(s) scheme followed by a non-empty host.
fn is_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty())
}
