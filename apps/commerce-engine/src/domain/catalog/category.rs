//! Catalog category.

use serde::{Deserialize, Serialize};

/// A product category as listed by the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Machine slug, used for filtering.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
}
