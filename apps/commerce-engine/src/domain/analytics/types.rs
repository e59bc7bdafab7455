//! Derived view types produced by the aggregator.
//!
//! All views are ephemeral: recomputed from the order history on demand and
//! never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// Revenue and order count for one calendar-day label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Calendar-day label, e.g. `Jan 5`.
    pub date: String,
    /// Summed order totals for the day (USD).
    pub revenue: Money,
    /// Number of orders on the day.
    pub orders: u64,
}

/// One slice of a grouped breakdown (category or status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceCount {
    /// Group key.
    pub name: String,
    /// Summed quantity or order count, depending on the view.
    pub value: u64,
}

/// Sales accumulated for one product title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    /// Product title (exact string; differently-cased titles are distinct).
    pub name: String,
    /// Units sold across all orders.
    pub quantity: u64,
    /// Revenue across all orders (unit price times quantity, USD).
    pub revenue: Money,
}

/// Headline totals over the whole order history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Sum of order totals (USD).
    pub total_revenue: Money,
    /// Number of orders.
    pub total_orders: u64,
    /// Average order value; zero when there are no orders.
    pub avg_order_value: Money,
    /// Total units across all order lines.
    pub total_items: u64,
}
