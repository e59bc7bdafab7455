//! Catalog Bounded Context
//!
//! Read-side view of the remote product catalog: the product record,
//! client-side list filtering, and product-form validation.

pub mod category;
pub mod draft;
pub mod filter;
pub mod product;

pub use category::Category;
pub use draft::ProductDraft;
pub use filter::{CatalogFilter, DEFAULT_PRICE_CAP};
pub use product::Product;
