//! Type-safe price representation using decimal arithmetic.
//!
//! Upstream commerce APIs ship money amounts as decimal strings. [`Price`]
//! parses those into [`Decimal`] so totals and the payment-processor cents
//! conversion never go through floating point.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount string is not a valid decimal.
    #[error("invalid money amount: {value}")]
    InvalidAmount {
        /// The rejected amount string.
        value: String,
    },
    /// The currency code is not one this store trades in.
    #[error("unknown currency code: {code}")]
    UnknownCurrency {
        /// The rejected currency code.
        code: String,
    },
}

/// A price with currency information.
///
/// Amounts are held in the currency's standard unit (dollars, not cents);
/// [`Price::to_cents`] converts at the payment-processor boundary.
///
/// ## Examples
///
/// ```
/// use rootwear_core::{CurrencyCode, Price};
///
/// let price = Price::parse("49.00", "USD").unwrap();
/// assert_eq!(price.to_cents(), Some(4900));
/// assert_eq!(price.to_string(), "$49.00");
/// assert_eq!(price.currency_code, CurrencyCode::USD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Parse a price from a decimal amount string and a currency code string.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not a valid decimal or the currency
    /// code is not supported.
    pub fn parse(amount: &str, currency_code: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(amount).map_err(|_| PriceError::InvalidAmount {
            value: amount.to_owned(),
        })?;
        let currency_code = currency_code.parse()?;
        Ok(Self {
            amount,
            currency_code,
        })
    }

    /// Build a price from an integer number of minor units (cents).
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code,
        }
    }

    /// Convert to minor units (cents), rounding half away from zero.
    ///
    /// Returns `None` if the amount does not fit in an `i64` after scaling.
    #[must_use]
    pub fn to_cents(&self) -> Option<i64> {
        (self.amount * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
    }

    /// Multiply the unit amount by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes this store trades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The ISO 4217 code as an uppercase string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(PriceError::UnknownCurrency { code: s.to_owned() }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let price = Price::parse("29.00", "USD").unwrap();
        assert_eq!(price.amount, Decimal::new(2900, 2));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_parse_lowercase_currency() {
        let price = Price::parse("10.50", "usd").unwrap();
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_parse_invalid_amount() {
        assert!(matches!(
            Price::parse("not-a-number", "USD"),
            Err(PriceError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_parse_unknown_currency() {
        assert!(matches!(
            Price::parse("10.00", "XYZ"),
            Err(PriceError::UnknownCurrency { .. })
        ));
    }

    #[test]
    fn test_to_cents() {
        let price = Price::parse("49.00", "USD").unwrap();
        assert_eq!(price.to_cents(), Some(4900));
    }

    #[test]
    fn test_to_cents_rounds_half_up() {
        // Matches the payment boundary convention of rounding half away
        // from zero, not banker's rounding.
        let price = Price::parse("10.005", "USD").unwrap();
        assert_eq!(price.to_cents(), Some(1001));
    }

    #[test]
    fn test_from_cents_roundtrip() {
        let price = Price::from_cents(2900, CurrencyCode::USD);
        assert_eq!(price.amount, Decimal::new(2900, 2));
        assert_eq!(price.to_cents(), Some(2900));
    }

    #[test]
    fn test_times() {
        let price = Price::parse("29.00", "USD").unwrap();
        let total = price.times(3);
        assert_eq!(total.amount, Decimal::new(8700, 2));
        assert_eq!(total.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_display() {
        let price = Price::parse("49.9", "USD").unwrap();
        assert_eq!(price.to_string(), "$49.90");

        let price = Price::parse("15.00", "EUR").unwrap();
        assert_eq!(price.to_string(), "\u{20ac}15.00");
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::USD.to_string(), "USD");
        assert_eq!(CurrencyCode::GBP.to_string(), "GBP");
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::parse("49.00", "USD").unwrap();
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
