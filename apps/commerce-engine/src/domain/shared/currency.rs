//! Display-currency conversion for report and UI formatting.
//!
//! The catalog is USD-denominated; reports are rendered in INR. The rate is
//! injected rather than read from a market feed, so conversion stays a pure
//! formatting concern and never enters aggregation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::value_objects::Money;

/// Fixed display capability converting USD amounts into a target currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyConverter {
    symbol: &'static str,
    rate: Decimal,
}

impl CurrencyConverter {
    /// Approximate INR rate used for display (1 USD = 83 INR).
    pub const INR_PER_USD: Decimal = dec!(83);

    /// Create a converter with an explicit symbol and rate.
    #[must_use]
    pub const fn new(symbol: &'static str, rate: Decimal) -> Self {
        Self { symbol, rate }
    }

    /// INR display converter at the fixed demo rate.
    #[must_use]
    pub const fn inr() -> Self {
        Self::new("₹", Self::INR_PER_USD)
    }

    /// Convert a USD amount into the target currency.
    #[must_use]
    pub fn convert(&self, amount: Money) -> Decimal {
        amount.amount() * self.rate
    }

    /// Convert and format with the currency symbol, e.g. `₹829.17`.
    #[must_use]
    pub fn format(&self, amount: Money) -> String {
        format!("{}{:.2}", self.symbol, self.convert(amount))
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::inr()
    }
}
