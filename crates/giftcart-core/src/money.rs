//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A threshold check like `subtotal >= 1000` must never flip because     │
//! │  of rounding noise.                                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    Every price, line total and threshold is an exact i64               │
//! │    Addition and multiplication saturate at the i64 bounds, so a huge   │
//! │    order stays huge instead of wrapping negative                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use giftcart_core::money::Money;
//!
//! let price = Money::from_minor(500);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total, Money::from_minor(1000));
//! assert_eq!(line_total.to_string(), "₹1000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

/// Symbol used when rendering money for display.
pub const CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in minor currency units.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLine.line_total ──► CartManager.subtotal
///                                                 │
///                                                 ▼
///                                  compared against GiftRule.threshold
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use giftcart_core::money::Money;
    ///
    /// let price = Money::from_minor(150);
    /// assert_eq!(price.minor(), 150);
    /// ```
    #[inline]
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
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

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use giftcart_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(300);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 900);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Subtracts `other`, flooring the result at zero.
    ///
    /// Used for "amount still needed" style figures that must never go
    /// negative.
    ///
    /// ## Example
    /// ```rust
    /// use giftcart_core::money::Money;
    ///
    /// let threshold = Money::from_minor(1000);
    /// assert_eq!(threshold.saturating_sub(Money::from_minor(400)).minor(), 600);
    /// assert!(threshold.saturating_sub(Money::from_minor(1500)).is_zero());
    /// ```
    #[inline]
    pub const fn saturating_sub(&self, other: Money) -> Self {
        let diff = self.0.saturating_sub(other.0);
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the symbol followed by the whole amount, e.g. `₹1000`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}{}", sign, CURRENCY_SYMBOL, self.0.abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Saturating, like every other Money operation.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a line quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1000).to_string(), "₹1000");
        assert_eq!(Money::from_minor(0).to_string(), "₹0");
        assert_eq!(Money::from_minor(-250).to_string(), "-₹250");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(500);
        let b = Money::from_minor(150);

        assert_eq!((a + b).minor(), 650);
        assert_eq!((a - b).minor(), 350);
        assert_eq!((a * 3).minor(), 1500);

        let mut c = a;
        c += b;
        c -= Money::from_minor(50);
        assert_eq!(c.minor(), 600);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 300, 150]
            .into_iter()
            .map(Money::from_minor)
            .sum();
        assert_eq!(total.minor(), 550);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_saturating_sub_floors_at_zero() {
        let threshold = Money::from_minor(1000);
        assert_eq!(threshold.saturating_sub(Money::from_minor(999)).minor(), 1);
        assert_eq!(threshold.saturating_sub(Money::from_minor(1000)).minor(), 0);
        assert_eq!(threshold.saturating_sub(Money::from_minor(4000)).minor(), 0);
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_wrapping() {
        let price = Money::from_minor(10_000_000_000);
        let line = price.multiply_quantity(1_000_000_000);
        assert_eq!(line.minor(), i64::MAX);
        assert_eq!((line + price).minor(), i64::MAX);

        let total: Money = [line, line, price].into_iter().sum();
        assert_eq!(total.minor(), i64::MAX);

        let floor = Money::from_minor(i64::MIN) - price;
        assert_eq!(floor.minor(), i64::MIN);
        assert!(Money::from_minor(1000).saturating_sub(line).is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_minor(1).is_positive());
        assert!(Money::from_minor(-1).is_negative());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_minor(500)).unwrap();
        assert_eq!(json, "500");
        let back: Money = serde_json::from_str("300").unwrap();
        assert_eq!(back, Money::from_minor(300));
    }
}
