//! Ordering errors.

use std::fmt;

/// Errors that can occur while building or storing orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Checkout attempted with no items.
    EmptyOrder,

    /// An order line failed validation.
    InvalidItem {
        /// Field with the invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// The order store failed to persist or load.
    Storage {
        /// Underlying failure description.
        message: String,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOrder => {
                write!(f, "Cannot place an order with no items")
            }
            Self::InvalidItem { field, message } => {
                write!(f, "Invalid order item '{field}': {message}")
            }
            Self::Storage { message } => {
                write!(f, "Order store failure: {message}")
            }
        }
    }
}

impl std::error::Error for OrderError {}
