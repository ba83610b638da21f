//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  At a vending machine:                                                  │
//! │    $2.50 × 3 + $4.50 must be exactly $12.00, or the change is off      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    250 × 3 + 450 = 1200 cents, always                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nevar_core::money::Money;
//!
//! let price = Money::from_cents(250);        // $2.50
//! let line = price * 3;                      // $7.50
//! let inserted: Money = "10".parse().unwrap(); // typed at the prompt
//! assert_eq!((inserted - line).to_string(), "$2.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

/// Number of fraction digits accepted when parsing an amount.
const MAX_FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: `total - payment` is computed before we know which is
///   larger, so intermediate values may be negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// Item.unit_price ──► CartLine × quantity ──► Checkout.total
///                                                   │
///          tendered (parsed at the prompt) ─────────┤
///                                                   ▼
///                              owed (still due)  or  Receipt.change
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use nevar_core::money::Money;
    ///
    /// let price = Money::from_cents(450); // Represents $4.50
    /// assert_eq!(price.cents(), 450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
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
    ///
    /// ## Example
    /// ```rust
    /// use nevar_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-550).cents_part(), 50); // Absolute value
    /// ```
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use nevar_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(250); // Saudia Choco Milk
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 750);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses an amount typed by the customer, without going through floats.
///
/// ## Accepted Forms
/// ```text
/// "10"     → 1000 cents
/// "10.5"   → 1050 cents
/// "10.50"  → 1050 cents
/// ".75"    →   75 cents
/// "3."     →  300 cents
///
/// "-5", "1e3", "10.005", "", "abc"  → InvalidPaymentFormat
/// ```
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !all_digits(whole)
            || !all_digits(fraction)
            || fraction.len() > MAX_FRACTION_DIGITS
        {
            return Err(ValidationError::InvalidPaymentFormat);
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|dollars| dollars.checked_mul(100))
                .ok_or(ValidationError::InvalidPaymentFormat)?
        };

        // "5" → 50 cents, "05" → 5 cents
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| ValidationError::InvalidPaymentFormat)? * 10,
            _ => fraction.parse::<i64>().map_err(|_| ValidationError::InvalidPaymentFormat)?,
        };

        whole_cents
            .checked_add(fraction_cents)
            .map(Money)
            .ok_or(ValidationError::InvalidPaymentFormat)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the machine's display does: `$10.00`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!((a + b).cents(), 1250);
        assert_eq!((a - b).cents(), 750);
        assert_eq!((b * 3).cents(), 750);
    }

    #[test]
    fn test_sum_has_no_float_drift() {
        // Ten dimes are exactly one dollar
        let total: Money = std::iter::repeat(Money::from_cents(10)).take(10).sum();
        assert_eq!(total, Money::from_cents(100));
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("10".parse::<Money>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("10.50".parse::<Money>().unwrap().cents(), 1050);
        assert_eq!("10.05".parse::<Money>().unwrap().cents(), 1005);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("3.".parse::<Money>().unwrap().cents(), 300);
        assert_eq!("  2.50 ".parse::<Money>().unwrap().cents(), 250);
        assert_eq!("0".parse::<Money>().unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejected_forms() {
        for input in ["", ".", "abc", "-5", "+5", "1e3", "10.005", "1,000", "1.2.3", "$5"] {
            assert!(
                matches!(input.parse::<Money>(), Err(ValidationError::InvalidPaymentFormat)),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_overflow_is_rejected() {
        assert!("99999999999999999999".parse::<Money>().is_err());
        // One more dollar than i64::MAX cents can hold
        assert!("92233720368547759".parse::<Money>().is_err());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(!Money::from_cents(100).is_negative());
        assert!(Money::from_cents(-100).is_negative());
    }
}
