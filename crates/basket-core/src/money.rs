//! # Money Module
//!
//! Monetary values and percentage rates for the cart.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In floating point:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                 │
//! │  OUR SOLUTION: Integer Cents                                    │
//! │    $550.00 is 55000 cents, and 55000 is exactly 55000           │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentages follow the same rule: a [`Rate`] is an integer count of
//! basis points (1 bps = 0.01%), so "15%" is the exact integer 1500.
//!
//! ## Usage
//! ```rust
//! use basket_core::money::{Money, Rate};
//!
//! let total = Money::from_cents(40_000);          // $400.00
//! let discount = total.rate_portion(Rate::from_bps(2_000)); // 20%
//! assert_eq!(discount, Money::from_cents(8_000)); // $80.00
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: lets validation *see* negative input (a negative
///   coupon cap must be representable in order to be rejected)
/// - **Single-field tuple struct**: zero-cost wrapper over i64
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// The value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The major-unit portion (for display).
    #[inline]
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// The minor-unit portion, always 0-99 (for display).
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is less than zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies by a quantity (line totals).
    ///
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(20_000); // $200.00
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 40_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// The portion of this amount covered by `rate`.
    ///
    /// This single function backs tax amounts and raw coupon discounts.
    ///
    /// ## Implementation
    /// Integer math with half-up rounding: `(cents * bps + 5000) / 10000`.
    /// The intermediate runs in i128 so large amounts cannot overflow.
    /// Every whole-percent rate on a whole-cent amount divides exactly, so
    /// the rounding term only matters for fractional rates such as 8.25%.
    ///
    /// ```rust
    /// use basket_core::money::{Money, Rate};
    ///
    /// let total = Money::from_cents(100_000);       // $1000.00
    /// let tax = total.rate_portion(Rate::from_bps(1_000)); // 10%
    /// assert_eq!(tax.cents(), 10_000);              // $100.00
    /// ```
    pub fn rate_portion(&self, rate: Rate) -> Money {
        let portion = (self.0 as i128 * rate.bps() as i128 + 5_000) / 10_000;
        Money(portion as i64)
    }

    /// This amount reduced by `rate`.
    ///
    /// ```rust
    /// use basket_core::money::{Money, Rate};
    ///
    /// let total = Money::from_cents(100_000);            // $1000.00
    /// let after = total.apply_discount(Rate::from_bps(1_000)); // 10% off
    /// assert_eq!(after.cents(), 90_000);                 // $900.00
    /// ```
    pub fn apply_discount(&self, rate: Rate) -> Money {
        *self - self.rate_portion(rate)
    }
}

/// Human-readable debug formatting. Hosts format for display themselves.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.major_units().abs(),
            self.minor_units()
        )
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

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Rate Type
// =============================================================================

/// A percentage rate in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. 1500 bps = 15%. Discounts, coupons,
/// and taxes all share this unit, so 10% means the same exact integer
/// everywhere.
///
/// A `Rate` itself is unbounded; the cart enforces the 0-100% window on
/// raw caller input through [`crate::validation::validate_rate_bps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(u32);

impl Rate {
    /// 100%, the inclusive upper bound accepted by cart calculations.
    pub const FULL: Rate = Rate(10_000);

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// The rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// The rate as a percentage (display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
