//! DummyJSON adapter configuration.

use std::time::Duration;

/// Base URL of the public DummyJSON demo API.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Configuration for the DummyJSON adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DummyJsonConfig {
    /// API base URL (overridable for tests and mirrors).
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl DummyJsonConfig {
    /// Create a configuration for the public API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Override the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for DummyJsonConfig {
    fn default() -> Self {
        Self::new()
    }
}
