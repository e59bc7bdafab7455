//! Quantity value object for item counts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A count of catalog items (whole units).
///
/// Order lines require a quantity of at least one; carts may hold a zero
/// quantity transiently only as a removal signal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Zero quantity.
    pub const ZERO: Self = Self(0);

    /// One unit.
    pub const ONE: Self = Self(1);

    /// Create a new Quantity.
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Get the inner count.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.0
    }

    /// Returns true if this quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Increment by one unit, saturating at `u32::MAX`.
    #[must_use]
    pub const fn increment(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl From<u32> for Quantity {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.0
    }
}
