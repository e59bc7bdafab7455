//! Wire types for the DummyJSON API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::AuthenticatedUser;
use crate::domain::catalog::{Category, Product};
use crate::domain::shared::{Money, ProductId};

/// Paged envelope around the product list.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsEnvelope {
    /// Products on this page.
    pub products: Vec<ApiProduct>,
    /// Total products available.
    pub total: u64,
    /// Offset of this page.
    pub skip: u64,
    /// Page size.
    pub limit: u64,
}

/// A product as serialized by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    /// Catalog id.
    pub id: u64,
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Unit price (USD).
    pub price: Decimal,
    /// Discount percentage.
    #[serde(default)]
    pub discount_percentage: Decimal,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Brand; some catalog entries omit it.
    #[serde(default)]
    pub brand: Option<String>,
    /// Category slug.
    #[serde(default)]
    pub category: String,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail: String,
}

impl From<ApiProduct> for Product {
    fn from(api: ApiProduct) -> Self {
        Self {
            id: ProductId::new(api.id),
            title: api.title,
            description: api.description,
            price: Money::new(api.price),
            discount_percentage: api.discount_percentage,
            stock: api.stock,
            brand: api.brand,
            category: api.category,
            thumbnail: api.thumbnail,
        }
    }
}

/// A category as serialized by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCategory {
    /// Machine slug.
    pub slug: String,
    /// Human-readable name.
    pub name: String,
}

impl From<ApiCategory> for Category {
    fn from(api: ApiCategory) -> Self {
        Self {
            slug: api.slug,
            name: api.name,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account username.
    pub username: &'a str,
    /// Account password.
    pub password: &'a str,
}

/// Login response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Upstream user id.
    pub id: u64,
    /// Username.
    pub username: String,
    /// Bearer token for subsequent requests.
    pub access_token: String,
}

impl From<LoginResponse> for AuthenticatedUser {
    fn from(api: LoginResponse) -> Self {
        Self {
            id: api.id,
            username: api.username,
            token: api.access_token,
        }
    }
}

/// Error body returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub message: String,
}
