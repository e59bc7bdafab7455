//! Order analytics aggregation.
//!
//! Pure, total functions over the order history. Each call takes an
//! immutable snapshot of the order list and returns fresh view structures;
//! nothing here touches the clock, performs I/O, or mutates its input, so
//! results depend only on the argument and are safe to recompute per render.
//!
//! Grouped views preserve **first-seen order**: groups appear in the order
//! their key is first encountered while scanning the input left to right.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::types::{ProductSales, RevenuePoint, SalesSummary, SliceCount};
use crate::domain::ordering::Order;
use crate::domain::shared::Money;

/// Default entry limit for the ranked and recent views.
pub const DEFAULT_VIEW_LIMIT: usize = 10;

/// Group key for items without a category.
pub const UNCATEGORIZED: &str = "Other";

/// Revenue and order count per calendar-day label.
///
/// Orders are grouped by the `month-name day` label of their creation time
/// (day resolution). Output order is first-seen order of the labels, not
/// chronological order; callers that need a time-ordered axis sort the
/// result themselves.
#[must_use]
pub fn revenue_by_date(orders: &[Order]) -> Vec<RevenuePoint> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut points: Vec<RevenuePoint> = Vec::new();

    for order in orders {
        let label = order.created_at().day_label();
        if let Some(&at) = index.get(&label) {
            points[at].revenue += order.total();
            points[at].orders += 1;
        } else {
            index.insert(label.clone(), points.len());
            points.push(RevenuePoint {
                date: label,
                revenue: order.total(),
                orders: 1,
            });
        }
    }

    points
}

/// Units sold per category, over every item of every order.
///
/// Items without a category (or with an empty one) group under
/// [`UNCATEGORIZED`]. First-seen order across the flattened item stream.
#[must_use]
pub fn category_totals(orders: &[Order]) -> Vec<SliceCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut slices: Vec<SliceCount> = Vec::new();

    for order in orders {
        for item in order.items() {
            let name = item
                .category()
                .filter(|c| !c.is_empty())
                .unwrap_or(UNCATEGORIZED);
            let quantity = u64::from(item.quantity().count());
            if let Some(&at) = index.get(name) {
                slices[at].value += quantity;
            } else {
                index.insert(name.to_string(), slices.len());
                slices.push(SliceCount {
                    name: name.to_string(),
                    value: quantity,
                });
            }
        }
    }

    slices
}

/// Order count per status, in first-seen order.
#[must_use]
pub fn status_totals(orders: &[Order]) -> Vec<SliceCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut slices: Vec<SliceCount> = Vec::new();

    for order in orders {
        let name = order.status().to_string();
        if let Some(&at) = index.get(&name) {
            slices[at].value += 1;
        } else {
            index.insert(name.clone(), slices.len());
            slices.push(SliceCount { name, value: 1 });
        }
    }

    slices
}

/// Headline totals: revenue, order count, average order value, units sold.
///
/// The average is zero for an empty history; otherwise it is the exact
/// decimal quotient of revenue over order count.
#[must_use]
pub fn summary(orders: &[Order]) -> SalesSummary {
    let total_revenue: Money = orders.iter().map(Order::total).sum();
    let total_orders = orders.len() as u64;
    let total_items: u64 = orders.iter().map(Order::item_count).sum();

    let avg_order_value = if total_orders > 0 {
        Money::new(total_revenue.amount() / Decimal::from(total_orders))
    } else {
        Money::ZERO
    };

    SalesSummary {
        total_revenue,
        total_orders,
        avg_order_value,
        total_items,
    }
}

/// Best-selling products ranked by revenue, descending.
///
/// Items group by exact title. The sort is stable, so revenue ties keep
/// first-seen order. At most `limit` entries are returned.
#[must_use]
pub fn top_products(orders: &[Order], limit: usize) -> Vec<ProductSales> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut sales: Vec<ProductSales> = Vec::new();

    for order in orders {
        for item in order.items() {
            let quantity = u64::from(item.quantity().count());
            if let Some(&at) = index.get(item.title()) {
                sales[at].quantity += quantity;
                sales[at].revenue += item.line_total();
            } else {
                index.insert(item.title().to_string(), sales.len());
                sales.push(ProductSales {
                    name: item.title().to_string(),
                    quantity,
                    revenue: item.line_total(),
                });
            }
        }
    }

    sales.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    sales.truncate(limit);
    sales
}

/// Most recent orders first, truncated to `limit`.
///
/// Sorts a copy; the input slice is never reordered.
#[must_use]
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    sorted.truncate(limit);
    sorted
}
