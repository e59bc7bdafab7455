//! Commerce Engine Binary
//!
//! Runs one demo storefront session end to end: signs in against the demo
//! API, fetches and filters the catalog, fills a cart, places the order,
//! and prints the sales report.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin commerce-engine
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_API_URL`: API base URL (default: `https://dummyjson.com`)
//! - `STOREFRONT_USERNAME`: demo account username (default: `emilys`)
//! - `STOREFRONT_PASSWORD`: demo account password (default: `emilyspass`)
//! - `STOREFRONT_ORDERS_PATH`: JSON file for the order history
//!   (default: in-memory only)
//! - `RUST_LOG`: Log level (default: info)

use std::sync::Arc;

use anyhow::Context;
use commerce_engine::application::ports::{CatalogPort, Credentials};
use commerce_engine::application::services::Session;
use commerce_engine::application::use_cases::{
    BuildReportUseCase, CheckoutUseCase, LoginUseCase,
};
use commerce_engine::domain::catalog::CatalogFilter;
use commerce_engine::domain::ordering::OrderRepository;
use commerce_engine::domain::shared::{CurrencyConverter, Timestamp};
use commerce_engine::infrastructure::dummyjson::{DummyJsonClient, DummyJsonConfig};
use commerce_engine::infrastructure::persistence::{
    InMemoryOrderRepository, JsonFileOrderRepository,
};

/// Parsed configuration from environment variables.
struct EngineConfig {
    api_url: String,
    username: String,
    password: String,
    orders_path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = parse_config();
    tracing::info!(api_url = %config.api_url, "Starting commerce engine");

    let client = Arc::new(
        DummyJsonClient::new(&DummyJsonConfig::new().with_base_url(&config.api_url))
            .context("failed to build API client")?,
    );

    match &config.orders_path {
        Some(path) => {
            let repo = Arc::new(
                JsonFileOrderRepository::open(path).context("failed to open order store")?,
            );
            tracing::info!(path = %path, "using JSON-file order store");
            run_session(&config, &client, repo).await
        }
        None => {
            tracing::info!("using in-memory order store");
            run_session(&config, &client, Arc::new(InMemoryOrderRepository::new())).await
        }
    }
}

/// One demo session: login, browse, checkout, report.
async fn run_session<R>(
    config: &EngineConfig,
    client: &Arc<DummyJsonClient>,
    orders: Arc<R>,
) -> anyhow::Result<()>
where
    R: OrderRepository + 'static,
{
    let mut session = Session::new();

    let login = LoginUseCase::new(Arc::clone(client));
    let user = login
        .execute(&Credentials::new(&config.username, &config.password))
        .await
        .context("sign-in failed")?;
    session.sign_in(user);

    let products = client.list_products().await.context("catalog fetch failed")?;
    tracing::info!(count = products.len(), "catalog loaded");

    let filter = CatalogFilter::new();
    let visible = filter.apply(&products);
    anyhow::ensure!(!visible.is_empty(), "catalog returned no products");

    // Two units of the first product, one of the second when there is one.
    session.cart_mut().add(visible[0]);
    session.cart_mut().add(visible[0]);
    if let Some(second) = visible.get(1) {
        session.cart_mut().add(second);
    }
    tracing::info!(
        lines = session.cart().line_count(),
        total = %session.cart().total(),
        "cart filled"
    );

    let checkout = CheckoutUseCase::new(Arc::clone(&orders));
    let order = checkout
        .execute(session.cart_mut(), None)
        .await
        .context("checkout failed")?;
    tracing::info!(order_id = %order.id(), "checkout complete");

    let report = BuildReportUseCase::new(orders)
        .execute(&CurrencyConverter::inr(), Timestamp::now())
        .await
        .context("report build failed")?;
    println!("{report}");

    Ok(())
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses a static directive string that is a compile-time constant
/// guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "commerce_engine=info"
                    .parse()
                    .expect("static directive 'commerce_engine=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> EngineConfig {
    EngineConfig {
        api_url: std::env::var("STOREFRONT_API_URL")
            .unwrap_or_else(|_| "https://dummyjson.com".to_string()),
        username: std::env::var("STOREFRONT_USERNAME").unwrap_or_else(|_| "emilys".to_string()),
        password: std::env::var("STOREFRONT_PASSWORD")
            .unwrap_or_else(|_| "emilyspass".to_string()),
        orders_path: std::env::var("STOREFRONT_ORDERS_PATH").ok(),
    }
}
