//! Plain-text sales report.
//!
//! A pure serialization of the derived views with fixed section headers,
//! suitable for download as a `.txt` file. Amounts are converted to the
//! display currency through an injected [`CurrencyConverter`]; the
//! generation timestamp is passed in by the caller, never read from the
//! clock.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::aggregator::{
    recent_orders, status_totals, summary, top_products, DEFAULT_VIEW_LIMIT,
};
use super::types::{ProductSales, SalesSummary, SliceCount};
use crate::domain::ordering::Order;
use crate::domain::shared::{CurrencyConverter, Timestamp};

/// Snapshot of the views that make up the sales report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    /// Headline totals.
    pub summary: SalesSummary,
    /// Order count per status.
    pub status_breakdown: Vec<SliceCount>,
    /// Best sellers, at most ten.
    pub top_products: Vec<ProductSales>,
    /// Latest orders, at most ten.
    pub recent_orders: Vec<Order>,
}

impl SalesReport {
    /// Capture the report views from the order history.
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            summary: summary(orders),
            status_breakdown: status_totals(orders),
            top_products: top_products(orders, DEFAULT_VIEW_LIMIT),
            recent_orders: recent_orders(orders, DEFAULT_VIEW_LIMIT),
        }
    }

    /// Render the report as plain text.
    #[must_use]
    pub fn render(&self, fx: &CurrencyConverter, generated_at: Timestamp) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "SALES REPORT");
        let _ = writeln!(out, "Generated: {}", generated_at.long_form());
        let _ = writeln!(out);

        let _ = writeln!(out, "SUMMARY");
        let _ = writeln!(out, "-------");
        let _ = writeln!(out, "Total Revenue: {}", fx.format(self.summary.total_revenue));
        let _ = writeln!(out, "Total Orders: {}", self.summary.total_orders);
        let _ = writeln!(out, "Total Items Sold: {}", self.summary.total_items);
        let _ = writeln!(out);

        let _ = writeln!(out, "ORDER STATUS");
        let _ = writeln!(out, "------------");
        for slice in &self.status_breakdown {
            let _ = writeln!(out, "{}: {}", slice.name, slice.value);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "TOP PRODUCTS");
        let _ = writeln!(out, "------------");
        for (rank, product) in self.top_products.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. {} - {} units - {}",
                rank + 1,
                product.name,
                product.quantity,
                fx.format(product.revenue),
            );
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "RECENT ORDERS");
        let _ = writeln!(out, "-------------");
        for order in &self.recent_orders {
            let _ = writeln!(
                out,
                "Order #{} - {} - {} - {}",
                order.id(),
                order.created_at().short_date(),
                fx.format(order.total()),
                order.status(),
            );
        }

        out.trim_end().to_string()
    }

    /// File name the report downloads under, e.g. `sales-report-2026-01-05.txt`.
    #[must_use]
    pub fn suggested_file_name(generated_at: Timestamp) -> String {
        format!("sales-report-{}.txt", generated_at.date_stamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::{
        OrderItem, OrderStatus, ReconstitutedOrderParams,
    };
    use crate::domain::shared::{Money, OrderId, ProductId, Quantity};
    use rust_decimal_macros::dec;

    fn order(id: &str, created_at: &str, status: OrderStatus, items: Vec<OrderItem>) -> Order {
        let total = items.iter().map(OrderItem::line_total).sum();
        Order::reconstitute(ReconstitutedOrderParams {
            id: OrderId::new(id),
            items,
            total,
            status,
            created_at: Timestamp::parse(created_at).unwrap(),
            shipping: None,
        })
    }

    fn item(title: &str, qty: u32, price: rust_decimal::Decimal) -> OrderItem {
        OrderItem::new(
            ProductId::new(1),
            title,
            Money::new(price),
            Quantity::new(qty),
            Some("beauty".to_string()),
            "thumb.png",
        )
        .unwrap()
    }

    #[test]
    fn report_renders_all_sections() {
        let orders = vec![
            order(
                "ORD-1",
                "2026-01-05T09:00:00Z",
                OrderStatus::Pending,
                vec![item("Lipstick", 2, dec!(10))],
            ),
            order(
                "ORD-2",
                "2026-01-06T09:00:00Z",
                OrderStatus::Completed,
                vec![item("Mascara", 1, dec!(5))],
            ),
        ];
        let report = SalesReport::from_orders(&orders);
        let generated_at = Timestamp::parse("2026-01-07T15:04:05Z").unwrap();
        let text = report.render(&CurrencyConverter::inr(), generated_at);

        assert!(text.starts_with("SALES REPORT\nGenerated: 1/7/2026, 3:04:05 PM"));
        assert!(text.contains("SUMMARY\n-------\n"));
        assert!(text.contains("Total Revenue: ₹2075.00")); // 25 USD * 83
        assert!(text.contains("Total Orders: 2"));
        assert!(text.contains("Total Items Sold: 3"));
        assert!(text.contains("ORDER STATUS\n------------\npending: 1\ncompleted: 1"));
        assert!(text.contains("TOP PRODUCTS\n------------\n1. Lipstick - 2 units - ₹1660.00"));
        assert!(text.contains("2. Mascara - 1 units - ₹415.00"));
        assert!(text.contains(
            "RECENT ORDERS\n-------------\nOrder #ORD-2 - 1/6/2026 - ₹415.00 - completed"
        ));
        assert!(text.ends_with("Order #ORD-1 - 1/5/2026 - ₹1660.00 - pending"));
    }

    #[test]
    fn report_for_empty_history_keeps_headers() {
        let report = SalesReport::from_orders(&[]);
        let generated_at = Timestamp::parse("2026-01-07T15:04:05Z").unwrap();
        let text = report.render(&CurrencyConverter::inr(), generated_at);

        assert!(text.contains("Total Revenue: ₹0.00"));
        assert!(text.contains("Total Orders: 0"));
        assert!(text.contains("ORDER STATUS"));
        assert!(text.contains("TOP PRODUCTS"));
        assert!(text.ends_with("RECENT ORDERS\n-------------"));
    }

    #[test]
    fn suggested_file_name_uses_date_stamp() {
        let generated_at = Timestamp::parse("2026-01-07T15:04:05Z").unwrap();
        assert_eq!(
            SalesReport::suggested_file_name(generated_at),
            "sales-report-2026-01-07.txt"
        );
    }
}
