//! # basket-core: Pure Business Logic for Basket
//!
//! This crate is the **heart** of Basket. It models a single-user shopping
//! cart as pure functions and in-place mutations with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Basket Architecture                        │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                    Caller (any host)                      │  │
//! │  │   constructs Products ──► drives Cart operations          │  │
//! │  └───────────────────────────┬───────────────────────────────┘  │
//! │                              │ synchronous calls                │
//! │  ┌───────────────────────────▼───────────────────────────────┐  │
//! │  │              ★ basket-core (THIS CRATE) ★                 │  │
//! │  │                                                           │  │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌────────────┐   │  │
//! │  │   │ product │  │  money  │  │  cart   │  │ validation │   │  │
//! │  │   │ Product │  │  Money  │  │  Cart   │  │   rules    │   │  │
//! │  │   │         │  │  Rate   │  │CartItem │  │   checks   │   │  │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └────────────┘   │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS      │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The purchasable item value type
//! - [`money`] - Money with integer arithmetic (no floating point!) and
//!   basis-point rates
//! - [`cart`] - The cart aggregate: line items, stock rules, totals,
//!   discounts, coupons, taxes
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation shared by cart operations
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64) to avoid
//!    float errors
//! 4. **Explicit Errors**: All failures are typed, never strings or panics
//! 5. **No Partial Mutation**: An operation that fails leaves the cart
//!    exactly as it found it
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use basket_core::{Cart, Money, Product};
//!
//! let laptop = Arc::new(Product::new("Laptop", 100_000)?); // $1000.00
//!
//! let mut cart = Cart::new();
//! cart.add_product(&laptop, 1)?;
//!
//! assert_eq!(cart.total(), Money::from_cents(100_000));
//!
//! // 10% off, expressed in basis points (1000 bps = 10%)
//! let discounted = cart.apply_discount(1_000)?;
//! assert_eq!(discounted, Money::from_cents(90_000));
//! # Ok::<(), basket_core::CartError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Cart` instead of
// `use basket_core::cart::Cart`.

pub use cart::{Cart, CartItem, CartTotals, SortKey};
pub use error::{CartError, CartResult};
pub use money::{Money, Rate};
pub use product::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound for every rate the cart accepts, in basis points (100%).
///
/// ## Business Reason
/// A discount, coupon, or tax above 100% of the total has no meaning in
/// this domain; such input is a caller bug and is rejected outright.
pub const MAX_RATE_BPS: i64 = 10_000;
