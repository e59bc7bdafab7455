//! Build Report Use Case

use std::sync::Arc;

use crate::domain::analytics::SalesReport;
use crate::domain::ordering::{OrderError, OrderRepository};
use crate::domain::shared::{CurrencyConverter, Timestamp};

/// Use case for rendering the downloadable sales report.
pub struct BuildReportUseCase<R>
where
    R: OrderRepository,
{
    orders: Arc<R>,
}

impl<R> BuildReportUseCase<R>
where
    R: OrderRepository,
{
    /// Create a new BuildReportUseCase.
    pub fn new(orders: Arc<R>) -> Self {
        Self { orders }
    }

    /// Execute the use case: load the history and render the report text.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the order history cannot be read.
    pub async fn execute(
        &self,
        fx: &CurrencyConverter,
        generated_at: Timestamp,
    ) -> Result<String, OrderError> {
        let orders = self.orders.list().await?;
        let report = SalesReport::from_orders(&orders);
        tracing::debug!(orders = orders.len(), "sales report built");
        Ok(report.render(fx, generated_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordering::{CreateOrderCommand, Order, OrderItem};
    use crate::domain::shared::{Money, ProductId, Quantity};
    use crate::infrastructure::persistence::InMemoryOrderRepository;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn report_reflects_stored_orders() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let order = Order::new(CreateOrderCommand {
            items: vec![
                OrderItem::new(
                    ProductId::new(1),
                    "Lipstick",
                    Money::new(dec!(10)),
                    Quantity::new(2),
                    Some("beauty".to_string()),
                    "thumb.png",
                )
                .unwrap(),
            ],
            shipping: None,
        })
        .unwrap();
        repo.append(&order).await.unwrap();

        let use_case = BuildReportUseCase::new(repo);
        let text = use_case
            .execute(
                &CurrencyConverter::inr(),
                Timestamp::parse("2026-01-07T12:00:00Z").unwrap(),
            )
            .await
            .unwrap();

        assert!(text.contains("Total Orders: 1"));
        assert!(text.contains("1. Lipstick - 2 units - ₹1660.00"));
    }

    #[tokio::test]
    async fn report_for_empty_history() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = BuildReportUseCase::new(repo);

        let text = use_case
            .execute(
                &CurrencyConverter::inr(),
                Timestamp::parse("2026-01-07T12:00:00Z").unwrap(),
            )
            .await
            .unwrap();

        assert!(text.contains("Total Orders: 0"));
    }
}
