//! DummyJSON Adapter
//!
//! HTTP adapter for the public DummyJSON demo API, implementing the auth
//! and catalog ports.

pub mod api_types;
pub mod client;
pub mod config;
pub mod error;

pub use client::DummyJsonClient;
pub use config::{DummyJsonConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
