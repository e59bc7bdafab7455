//! Order status in the fulfilment lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a placed order.
///
/// Orders are created `Pending`; the remaining states exist for display and
/// breakdown views. Status labels serialize lowercase to match the stored
/// order history format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, not yet picked up for fulfilment.
    Pending,
    /// Order being prepared or shipped.
    Processing,
    /// Order delivered.
    Completed,
    /// Order cancelled before completion.
    Cancelled,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true if the order is still moving through fulfilment.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Processing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}
