//! Analytics Bounded Context
//!
//! Pure aggregation over the order history: the derived chart views, the
//! headline summary, and the plain-text sales report adapter.
//!
//! Everything here is a stateless transformation of `&[Order]`: no clock,
//! no I/O, no mutation of the input.

pub mod aggregator;
pub mod report;
pub mod types;

pub use aggregator::{
    category_totals, recent_orders, revenue_by_date, status_totals, summary, top_products,
    DEFAULT_VIEW_LIMIT, UNCATEGORIZED,
};
pub use report::SalesReport;
pub use types::{ProductSales, RevenuePoint, SalesSummary, SliceCount};
