// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Commerce Engine - Rust Core Library
//!
//! Headless storefront core for a product-management dashboard.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, pure views)
//!   - `catalog`: Product record, client-side filtering, form validation
//!   - `ordering`: Cart, the Order aggregate, order-history repository port
//!   - `analytics`: Pure aggregation of the order history into chart views,
//!     headline totals, and the plain-text sales report
//!   - `shared`: Money, Quantity, Timestamp, identifiers, currency display
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for the demo API (`AuthPort`, `CatalogPort`)
//!   - `use_cases`: `Login`, `Checkout`, `BuildReport`
//!   - `services`: `Session` (signed-in user + cart)
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `dummyjson`: reqwest client for <https://dummyjson.com>
//!   - `persistence`: Order repository (in-memory, JSON file)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::analytics::{
    category_totals, recent_orders, revenue_by_date, status_totals, summary, top_products,
    ProductSales, RevenuePoint, SalesReport, SalesSummary, SliceCount, DEFAULT_VIEW_LIMIT,
};
pub use domain::catalog::{CatalogFilter, Category, Product, ProductDraft};
pub use domain::ordering::{
    Cart, CartItem, CreateOrderCommand, Order, OrderError, OrderItem, OrderRepository,
    OrderStatus, ShippingInfo,
};
pub use domain::shared::{CurrencyConverter, Money, OrderId, ProductId, Quantity, Timestamp};

// Application re-exports
pub use application::ports::{
    AuthError, AuthPort, AuthenticatedUser, CatalogError, CatalogPort, Credentials,
};
pub use application::services::Session;
pub use application::use_cases::{BuildReportUseCase, CheckoutUseCase, LoginUseCase};

// Infrastructure re-exports
pub use infrastructure::dummyjson::{DummyJsonClient, DummyJsonConfig};
pub use infrastructure::persistence::{InMemoryOrderRepository, JsonFileOrderRepository};
