//! # Money Module
//!
//! Provides the `Money` type for menu prices, modifier deltas and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    Spicy Fries = 3.5 + 0.8 = 4.3 ... or 4.299999999999999  ❌           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    350 cents + 80 cents = 430 cents, always                             │
//! │    Modifier deltas add up the same in any order                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use delivo_core::money::Money;
//!
//! let pizza = Money::from_cents(1000);   // $10.00
//! let cheese = Money::from_cents(150);   // $1.50
//!
//! let total = pizza + cheese;
//! assert_eq!(total.to_string(), "$11.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Where Money is Used
/// ```text
/// ItemType::base_price ──┐
///                        ├──► Item::price ──► Cart::total / Order::total
/// Modifier::delta ───────┘                              │
///                                                       ▼
///                                        "Order #1 | Total $15.50 | PLACED"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use delivo_core::money::Money;
    ///
    /// let price = Money::from_cents(350); // $3.50
    /// assert_eq!(price.cents(), 350);
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

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
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

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC`, the format used on receipts and menus.
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

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Summing prices of cart lines and order items.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
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
        let money = Money::from_cents(1350);
        assert_eq!(money.cents(), 1350);
        assert_eq!(money.dollars(), 13);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1550).to_string(), "$15.50");
        assert_eq!(Money::from_cents(200).to_string(), "$2.00");
        assert_eq!(Money::from_cents(80).to_string(), "$0.80");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_sum() {
        let prices = [Money::from_cents(1350), Money::from_cents(200)];
        let total: Money = prices.iter().sum();
        assert_eq!(total.cents(), 1550);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    /// 3.5 + 0.8 is exact in cents, unlike f64.
    #[test]
    fn test_no_float_drift() {
        let mut total = Money::from_cents(350);
        total += Money::from_cents(80);
        assert_eq!(total.cents(), 430);
        assert!(!total.is_negative());
    }
}
