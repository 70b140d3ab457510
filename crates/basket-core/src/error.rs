//! # Error Types
//!
//! Domain errors for basket-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, amounts, bps)
//! 3. Errors are enum variants, never String
//! 4. Every failure kind gets its own variant so callers can tell
//!    stock-exceeded from bad-rate from unsupported-sort-key
//!    programmatically
//!
//! All errors are raised synchronously, before any mutation: a cart that
//! returns an error is exactly the cart the caller passed in.

use thiserror::Error;

/// Failures raised by cart operations and product construction.
#[derive(Debug, Error)]
pub enum CartError {
    /// A quantity argument was zero or negative.
    ///
    /// Adding or removing "nothing" (or a negative amount) is a caller
    /// bug; silently accepting it would let a negative removal grow a
    /// line item.
    #[error("Quantity must be positive, got {requested}")]
    NonPositiveQuantity { requested: i64 },

    /// A product was constructed with a negative price.
    #[error("Price must not be negative, got {cents} cents")]
    NegativePrice { cents: i64 },

    /// A product was constructed with a zero or negative stock limit.
    #[error("Stock limit must be positive, got {requested}")]
    NonPositiveStock { requested: i64 },

    /// Adding or updating would push a line past the product's stock limit.
    ///
    /// ## When This Occurs
    /// ```text
    /// add_product(qty: 5)
    ///      │
    ///      ▼
    /// line would hold 6, stock limit is 5
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Smartphone", available: 5, requested: 6 }
    /// ```
    /// The cart is left unchanged.
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A removal or quantity update referenced a product with no line item.
    #[error("Product not in cart: {0}")]
    ProductNotInCart(String),

    /// A discount, coupon, or tax rate fell outside 0-100%.
    #[error("Rate must be between 0 and 10000 basis points, got {bps}")]
    RateOutOfRange { bps: i64 },

    /// A coupon cap was negative. Rejected regardless of the rate.
    #[error("Coupon cap must not be negative, got {cents} cents")]
    NegativeCouponCap { cents: i64 },

    /// A sort criterion named something other than a comparable product
    /// attribute.
    #[error("Unsupported sort key: {0}")]
    UnsupportedSortKey(String),
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Unit Tests
// =============================================================================
