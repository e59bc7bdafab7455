//! Order Aggregate Root
//!
//! An order is a completed checkout event: a snapshot of purchased items,
//! a computed total, a status, and a creation timestamp. Orders are
//! immutable once placed.

use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::order_item::OrderItem;
use super::status::OrderStatus;
use crate::domain::shared::{Money, OrderId, Timestamp};

/// Shipping details captured on the checkout form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    /// Recipient name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub zip_code: String,
}

/// Command to place a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Items snapshotted from the cart.
    pub items: Vec<OrderItem>,
    /// Optional shipping details.
    pub shipping: Option<ShippingInfo>,
}

/// Parameters for reconstituting an Order from storage.
///
/// Used to rebuild orders from persisted state; nothing is generated or
/// recomputed during reconstitution.
#[derive(Debug, Clone)]
pub struct ReconstitutedOrderParams {
    /// Order identifier.
    pub id: OrderId,
    /// Item lines.
    pub items: Vec<OrderItem>,
    /// Stored order total.
    pub total: Money,
    /// Stored status.
    pub status: OrderStatus,
    /// Original creation timestamp.
    pub created_at: Timestamp,
    /// Shipping details, if captured.
    pub shipping: Option<ShippingInfo>,
}

/// A placed order.
///
/// Created only through [`Order::new`], which generates the id, computes the
/// total from the item lines, stamps the creation time, and starts the order
/// as [`OrderStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    items: Vec<OrderItem>,
    total: Money,
    status: OrderStatus,
    created_at: Timestamp,
    shipping: Option<ShippingInfo>,
}

impl Order {
    /// Place a new order from a checkout command.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyOrder`] when the command carries no items.
    pub fn new(command: CreateOrderCommand) -> Result<Self, OrderError> {
        if command.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let total = command.items.iter().map(OrderItem::line_total).sum();

        Ok(Self {
            id: OrderId::generate(),
            items: command.items,
            total,
            status: OrderStatus::Pending,
            created_at: Timestamp::now(),
            shipping: command.shipping,
        })
    }

    /// Rebuild an order from persisted state.
    #[must_use]
    pub fn reconstitute(params: ReconstitutedOrderParams) -> Self {
        Self {
            id: params.id,
            items: params.items,
            total: params.total,
            status: params.status,
            created_at: params.created_at,
            shipping: params.shipping,
        }
    }

    /// Get the order identifier.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the item lines.
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Get the order total (USD).
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Get the status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the shipping details, if any were captured.
    #[must_use]
    pub const fn shipping(&self) -> Option<&ShippingInfo> {
        self.shipping.as_ref()
    }

    /// Total units across all item lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|i| u64::from(i.quantity().count()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::{ProductId, Quantity};
    use rust_decimal_macros::dec;

    fn item(title: &str, price: rust_decimal::Decimal, qty: u32) -> OrderItem {
        OrderItem::new(
            ProductId::new(1),
            title,
            Money::new(price),
            Quantity::new(qty),
            Some("beauty".to_string()),
            "thumb.png",
        )
        .unwrap()
    }

    #[test]
    fn order_new_computes_total() {
        let order = Order::new(CreateOrderCommand {
            items: vec![item("Lipstick", dec!(9.99), 2), item("Mascara", dec!(19.99), 1)],
            shipping: None,
        })
        .unwrap();

        assert_eq!(order.total(), Money::new(dec!(39.97)));
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.item_count(), 3);
    }

    #[test]
    fn order_new_rejects_empty_items() {
        let result = Order::new(CreateOrderCommand {
            items: vec![],
            shipping: None,
        });
        assert_eq!(result.unwrap_err(), OrderError::EmptyOrder);
    }

    #[test]
    fn order_ids_are_unique() {
        let make = || {
            Order::new(CreateOrderCommand {
                items: vec![item("Lipstick", dec!(9.99), 1)],
                shipping: None,
            })
            .unwrap()
        };
        assert_ne!(make().id(), make().id());
    }

    #[test]
    fn order_keeps_shipping_info() {
        let shipping = ShippingInfo {
            name: "Emily Johnson".to_string(),
            email: "emily@example.com".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            zip_code: "12345".to_string(),
        };
        let order = Order::new(CreateOrderCommand {
            items: vec![item("Lipstick", dec!(9.99), 1)],
            shipping: Some(shipping.clone()),
        })
        .unwrap();

        assert_eq!(order.shipping(), Some(&shipping));
    }

    #[test]
    fn order_reconstitute_preserves_state() {
        let created_at = Timestamp::parse("2026-01-05T10:00:00Z").unwrap();
        let order = Order::reconstitute(ReconstitutedOrderParams {
            id: OrderId::new("ORD-fixed"),
            items: vec![item("Lipstick", dec!(9.99), 2)],
            total: Money::new(dec!(19.98)),
            status: OrderStatus::Completed,
            created_at,
            shipping: None,
        });

        assert_eq!(order.id().as_str(), "ORD-fixed");
        assert_eq!(order.status(), OrderStatus::Completed);
        assert_eq!(order.created_at(), created_at);
        assert_eq!(order.total(), Money::new(dec!(19.98)));
    }

    #[test]
    fn order_serde_roundtrip() {
        let order = Order::new(CreateOrderCommand {
            items: vec![item("Lipstick", dec!(9.99), 2)],
            shipping: None,
        })
        .unwrap();

        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, order);
    }
}
