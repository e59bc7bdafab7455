//! Checkout Use Case

use std::sync::Arc;

use crate::domain::ordering::{
    Cart, CreateOrderCommand, Order, OrderError, OrderItem, OrderRepository, ShippingInfo,
};

/// Use case for turning the cart into a placed order.
///
/// Snapshots the cart lines into order items, places the order into the
/// history, and empties the cart. The cart is only cleared once the order
/// has been appended successfully.
pub struct CheckoutUseCase<R>
where
    R: OrderRepository,
{
    orders: Arc<R>,
}

impl<R> CheckoutUseCase<R>
where
    R: OrderRepository,
{
    /// Create a new CheckoutUseCase.
    pub fn new(orders: Arc<R>) -> Self {
        Self { orders }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyOrder`] for an empty cart, an item error
    /// when a cart line is malformed, or a storage error when the order
    /// cannot be persisted.
    pub async fn execute(
        &self,
        cart: &mut Cart,
        shipping: Option<ShippingInfo>,
    ) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let items: Vec<OrderItem> = cart
            .items()
            .iter()
            .map(|line| {
                OrderItem::new(
                    line.product_id,
                    line.title.clone(),
                    line.price,
                    line.quantity,
                    line.category.clone(),
                    line.thumbnail.clone(),
                )
            })
            .collect::<Result<_, _>>()?;

        let order = Order::new(CreateOrderCommand { items, shipping })?;
        self.orders.append(&order).await?;
        cart.clear();

        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            lines = order.items().len(),
            "order placed"
        );

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Product;
    use crate::domain::ordering::OrderStatus;
    use crate::domain::shared::{Money, ProductId};
    use crate::infrastructure::persistence::InMemoryOrderRepository;
    use rust_decimal_macros::dec;

    fn product(id: u64, title: &str, price: rust_decimal::Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            description: "desc".to_string(),
            price: Money::new(price),
            discount_percentage: dec!(0),
            stock: 5,
            brand: None,
            category: "beauty".to_string(),
            thumbnail: "thumb.png".to_string(),
        }
    }

    #[tokio::test]
    async fn checkout_places_order_and_clears_cart() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CheckoutUseCase::new(Arc::clone(&repo));

        let mut cart = Cart::new();
        let lipstick = product(1, "Lipstick", dec!(9.99));
        cart.add(&lipstick);
        cart.add(&lipstick);

        let order = use_case.execute(&mut cart, None).await.unwrap();

        assert!(cart.is_empty());
        assert_eq!(order.total(), Money::new(dec!(19.98)));
        assert_eq!(order.status(), OrderStatus::Pending);

        let stored = repo.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id(), order.id());
    }

    #[tokio::test]
    async fn checkout_keeps_shipping_info() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CheckoutUseCase::new(Arc::clone(&repo));

        let mut cart = Cart::new();
        cart.add(&product(1, "Lipstick", dec!(9.99)));

        let shipping = ShippingInfo {
            name: "Emily Johnson".to_string(),
            email: "emily@example.com".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            zip_code: "12345".to_string(),
        };
        let order = use_case
            .execute(&mut cart, Some(shipping.clone()))
            .await
            .unwrap();

        assert_eq!(order.shipping(), Some(&shipping));
    }

    #[tokio::test]
    async fn checkout_rejects_empty_cart() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CheckoutUseCase::new(Arc::clone(&repo));

        let mut cart = Cart::new();
        let result = use_case.execute(&mut cart, None).await;

        assert_eq!(result.unwrap_err(), OrderError::EmptyOrder);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn repeated_checkouts_append_history() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let use_case = CheckoutUseCase::new(Arc::clone(&repo));

        for i in 1..=3 {
            let mut cart = Cart::new();
            cart.add(&product(i, "Widget", dec!(5)));
            use_case.execute(&mut cart, None).await.unwrap();
        }

        assert_eq!(repo.len(), 3);
    }
}
