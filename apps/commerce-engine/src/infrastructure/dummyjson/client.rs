//! HTTP client for the DummyJSON demo API.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api_types::{
    ApiCategory, ApiErrorResponse, LoginRequest, LoginResponse, ProductsEnvelope,
};
use super::config::DummyJsonConfig;
use super::error::ApiError;
use crate::application::ports::{
    AuthError, AuthPort, AuthenticatedUser, CatalogError, CatalogPort, Credentials,
};
use crate::domain::catalog::{Category, Product};

/// HTTP adapter implementing [`AuthPort`] and [`CatalogPort`] against
/// DummyJSON.
#[derive(Debug, Clone)]
pub struct DummyJsonClient {
    http: reqwest::Client,
    base_url: String,
}

impl DummyJsonClient {
    /// Create a client from config.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(config: &DummyJsonConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make a GET request.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// Make a POST request with a JSON body.
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    /// Turn a response into a decoded body or a status error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorResponse>()
                .await
                .map_or_else(|_| status.to_string(), |body| body.message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AuthPort for DummyJsonClient {
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedUser, AuthError> {
        let request = LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        };
        let response: Result<LoginResponse, ApiError> = self.post("/auth/login", &request).await;
        match response {
            Ok(login) => Ok(login.into()),
            // DummyJSON answers 400 for bad credentials.
            Err(ApiError::Status {
                status: 400 | 401, ..
            }) => Err(ApiError::InvalidCredentials.into()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CatalogPort for DummyJsonClient {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let envelope: ProductsEnvelope = self.get("/products").await?;
        tracing::debug!(
            fetched = envelope.products.len(),
            total = envelope.total,
            "product page fetched"
        );
        Ok(envelope.products.into_iter().map(Product::from).collect())
    }

    async fn categories(&self) -> Result<Vec<Category>, CatalogError> {
        let categories: Vec<ApiCategory> = self.get("/products/categories").await?;
        Ok(categories.into_iter().map(Category::from).collect())
    }
}
