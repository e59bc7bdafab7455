//! Ordering Bounded Context
//!
//! The shopping cart, the order aggregate placed at checkout, and the
//! repository port for the order history.
//!
//! # Key Concepts
//!
//! - **Cart**: mutable working state; lines dedupe by product id
//! - **Order**: immutable snapshot of the cart at checkout time
//! - **Order history**: append-only list, cleared wholesale on logout

pub mod cart;
pub mod errors;
pub mod order;
pub mod order_item;
pub mod repository;
pub mod status;

pub use cart::{Cart, CartItem};
pub use errors::OrderError;
pub use order::{CreateOrderCommand, Order, ReconstitutedOrderParams, ShippingInfo};
pub use order_item::OrderItem;
pub use repository::OrderRepository;
pub use status::OrderStatus;
