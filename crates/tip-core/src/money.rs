//! # Money Module
//!
//! Provides the `Money` type for displaying calculated amounts.
//!
//! ## Why Integer Money for Display?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The calculator works in f64:                                           │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  Printing that directly leaks the binary error into the UI.            │
//! │                                                                         │
//! │  OUR SOLUTION: round once, at the display boundary                     │
//! │    0.30000000000000004 → 30 cents → "$0.30"                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tip_core::money::Money;
//!
//! let total = Money::from_amount(13.340000000000002).unwrap();
//! assert_eq!(total.cents(), 1334);
//! assert_eq!(total.to_string(), "$13.34");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Signed: the unchecked calculator accepts negative bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a calculated amount to cents, rounding half away from zero.
    ///
    /// Returns `None` for NaN, infinities, and amounts too large for `i64`
    /// cents.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(30.0), Some(Money::from_cents(3000)));
    /// assert_eq!(Money::from_amount(0.125), Some(Money::from_cents(13)));
    /// assert_eq!(Money::from_amount(f64::NAN), None);
    /// ```
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let cents = (amount * 100.0).round();
        if cents >= i64::MAX as f64 || cents <= i64::MIN as f64 {
            return None;
        }

        Some(Money(cents as i64))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Formats with a caller-chosen currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use tip_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-550).format_with("€"), "-€5.50");
    /// ```
    pub fn format_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the dollar sign. Use [`Money::format_with`] for others.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with("$"))
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_from_amount_rounding() {
        assert_eq!(Money::from_amount(13.340000000000002).map(|m| m.cents()), Some(1334));
        assert_eq!(Money::from_amount(33.333333333333336).map(|m| m.cents()), Some(3333));
        assert_eq!(Money::from_amount(-2.5).map(|m| m.cents()), Some(-250));
        assert_eq!(Money::from_amount(0.0), Some(Money::zero()));
    }

    #[test]
    fn test_from_amount_rejects_non_finite() {
        assert_eq!(Money::from_amount(f64::INFINITY), None);
        assert_eq!(Money::from_amount(f64::NEG_INFINITY), None);
        assert_eq!(Money::from_amount(1e300), None);
    }

    #[test]
    fn test_zero_and_default() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
        assert!(!Money::from_cents(1).is_zero());
    }
}
