//! # Validation Module
//!
//! Input validation shared by product construction and cart operations.
//!
//! Every validator takes raw caller input, returns a typed error on
//! rejection, and is called *before* any state changes. Rates arrive as
//! signed basis points so that negative input is representable and can be
//! rejected here instead of wrapping around silently.
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::{validate_quantity, validate_rate_bps};
//!
//! validate_quantity(5).unwrap();
//! let rate = validate_rate_bps(1_500).unwrap(); // 15%
//! assert_eq!(rate.bps(), 1_500);
//! ```

use crate::error::{CartError, CartResult};
use crate::money::{Money, Rate};
use crate::MAX_RATE_BPS;

/// Validates a quantity argument.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// ```rust
/// use basket_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-3).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> CartResult<()> {
    if qty <= 0 {
        return Err(CartError::NonPositiveQuantity { requested: qty });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> CartResult<()> {
    if cents < 0 {
        return Err(CartError::NegativePrice { cents });
    }

    Ok(())
}

/// Validates a per-product stock limit.
///
/// ## Rules
/// - Must be positive; a product that can never be carted is a
///   configuration mistake
pub fn validate_stock_limit(stock: i64) -> CartResult<()> {
    if stock <= 0 {
        return Err(CartError::NonPositiveStock { requested: stock });
    }

    Ok(())
}

/// Validates a rate given in signed basis points and converts it.
///
/// ## Rules
/// - Must be between 0 and 10000 bps (0% to 100%) inclusive
///
/// ```rust
/// use basket_core::validation::validate_rate_bps;
///
/// assert!(validate_rate_bps(0).is_ok());
/// assert!(validate_rate_bps(10_000).is_ok());
/// assert!(validate_rate_bps(-500).is_err());
/// assert!(validate_rate_bps(11_000).is_err());
/// ```
pub fn validate_rate_bps(bps: i64) -> CartResult<Rate> {
    if !(0..=MAX_RATE_BPS).contains(&bps) {
        return Err(CartError::RateOutOfRange { bps });
    }

    Ok(Rate::from_bps(bps as u32))
}

/// Validates a coupon cap.
///
/// ## Rules
/// - Must not be negative; zero is allowed (a coupon that discounts
///   nothing)
pub fn validate_coupon_cap(cap: Money) -> CartResult<()> {
    if cap.is_negative() {
        return Err(CartError::NegativeCouponCap { cents: cap.cents() });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(matches!(
            validate_quantity(0),
            Err(CartError::NonPositiveQuantity { requested: 0 })
        ));
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn price_must_not_be_negative() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(matches!(
            validate_price_cents(-100),
            Err(CartError::NegativePrice { cents: -100 })
        ));
    }

    #[test]
    fn stock_limit_must_be_positive() {
        assert!(validate_stock_limit(1).is_ok());
        assert!(validate_stock_limit(0).is_err());
        assert!(validate_stock_limit(-5).is_err());
    }

    #[test]
    fn rate_window_is_inclusive() {
        assert_eq!(validate_rate_bps(0).unwrap(), Rate::zero());
        assert_eq!(validate_rate_bps(10_000).unwrap(), Rate::FULL);
        assert_eq!(validate_rate_bps(825).unwrap().bps(), 825);

        assert!(matches!(
            validate_rate_bps(-1_000),
            Err(CartError::RateOutOfRange { bps: -1_000 })
        ));
        assert!(matches!(
            validate_rate_bps(15_000),
            Err(CartError::RateOutOfRange { bps: 15_000 })
        ));
    }

    #[test]
    fn coupon_cap_must_not_be_negative() {
        assert!(validate_coupon_cap(Money::zero()).is_ok());
        assert!(validate_coupon_cap(Money::from_cents(5_000)).is_ok());
        assert!(matches!(
            validate_coupon_cap(Money::from_cents(-5_000)),
            Err(CartError::NegativeCouponCap { cents: -5_000 })
        ));
    }
}
