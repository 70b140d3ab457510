//! # Cart
//!
//! The cart aggregate: an ordered collection of line items plus every
//! mutation and calculation the domain defines.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Cart Operations                             │
//! │                                                                 │
//! │  Caller Action            Operation            State Change     │
//! │  ─────────────            ─────────            ────────────     │
//! │                                                                 │
//! │  Pick product ──────────► add_product() ─────► items.push /     │
//! │                                                qty += n         │
//! │  Put one back ──────────► remove_product() ──► qty -= n /       │
//! │                                                items.remove     │
//! │  Set amount ────────────► update_quantity() ─► qty = n /        │
//! │                                                items.remove     │
//! │  Start over ────────────► clear() ───────────► items.clear()    │
//! │                                                                 │
//! │  View / totals / discounts / coupons / taxes are read-only.     │
//! │  Every failed operation leaves the cart untouched.              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line items are unique by product id: adding a product that already has
//! a line increases that line's quantity. Insertion order is preserved
//! and is the order [`Cart::items`] reports.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::product::Product;
use crate::validation::{validate_coupon_cap, validate_quantity, validate_rate_bps};

// =============================================================================
// CartItem
// =============================================================================

/// A line item: a shared product reference plus a quantity.
///
/// The product is held behind `Arc`, not copied; the caller and the cart
/// see the same value. Quantity is always at least 1: a line that would
/// drop to 0 is removed from the cart instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// The product this line refers to (shared, never mutated).
    pub product: Arc<Product>,

    /// Units of the product in the cart. Always >= 1.
    pub quantity: i64,

    /// When the product first entered the cart.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    fn new(product: Arc<Product>, quantity: i64) -> Self {
        CartItem {
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// SortKey
// =============================================================================

/// A comparable product attribute for [`Cart::items_sorted`].
///
/// This is a closed set on purpose: sorting reaches exactly the product's
/// comparable public fields and nothing else. Parsing an unknown key
/// fails loudly instead of falling back to some default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Ascending by product price.
    Price,
    /// Ascending by product name (lexicographic).
    Name,
}

impl FromStr for SortKey {
    type Err = CartError;

    /// ```rust
    /// use basket_core::cart::SortKey;
    ///
    /// assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Price);
    /// assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
    /// assert!("stock".parse::<SortKey>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price" => Ok(SortKey::Price),
            "name" => Ok(SortKey::Name),
            other => Err(CartError::UnsupportedSortKey(other.to_string())),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product again
///   increases that line's quantity)
/// - Every line quantity is >= 1 and within the product's stock limit
/// - A failed operation changes nothing (no partial mutation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Line items in first-add order.
    items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product to the cart, or bumps its line quantity if already
    /// present.
    ///
    /// ## Behavior
    /// - `quantity` must be positive
    /// - The prospective line quantity (existing plus added, or just
    ///   `quantity` for a first add) must fit the product's stock limit
    /// - New lines are appended, so first-add order is preserved
    ///
    /// ## Errors
    /// [`CartError::NonPositiveQuantity`],
    /// [`CartError::InsufficientStock`] (cart unchanged in both cases).
    pub fn add_product(&mut self, product: &Arc<Product>, quantity: i64) -> CartResult<()> {
        validate_quantity(quantity)?;

        let idx = self.position_of(product);
        let prospective = match idx {
            Some(i) => self.items[i].quantity + quantity,
            None => quantity,
        };
        Self::ensure_within_stock(product, prospective)?;

        debug!(product = %product.name, quantity, total_quantity = prospective, "adding product to cart");

        match idx {
            Some(i) => self.items[i].quantity = prospective,
            None => self.items.push(CartItem::new(Arc::clone(product), quantity)),
        }
        Ok(())
    }

    /// Removes `quantity` units of a product from the cart.
    ///
    /// Removing at least the full line quantity removes the line. No
    /// stock check runs here, quantities only decrease.
    ///
    /// ## Errors
    /// [`CartError::NonPositiveQuantity`],
    /// [`CartError::ProductNotInCart`].
    pub fn remove_product(&mut self, product: &Product, quantity: i64) -> CartResult<()> {
        validate_quantity(quantity)?;

        let idx = self
            .position_of(product)
            .ok_or_else(|| CartError::ProductNotInCart(product.name.clone()))?;

        debug!(product = %product.name, quantity, "removing product from cart");

        if self.items[idx].quantity > quantity {
            self.items[idx].quantity -= quantity;
        } else {
            self.items.remove(idx);
        }
        Ok(())
    }

    /// Sets a line's quantity exactly (not additive).
    ///
    /// ## Behavior
    /// - `quantity <= 0` removes the line entirely (not an error)
    /// - The new quantity must fit the product's stock limit
    ///
    /// ## Errors
    /// [`CartError::ProductNotInCart`],
    /// [`CartError::InsufficientStock`] (cart unchanged).
    pub fn update_quantity(&mut self, product: &Product, quantity: i64) -> CartResult<()> {
        let idx = self
            .position_of(product)
            .ok_or_else(|| CartError::ProductNotInCart(product.name.clone()))?;

        debug!(product = %product.name, quantity, "updating cart quantity");

        if quantity <= 0 {
            self.items.remove(idx);
            return Ok(());
        }

        Self::ensure_within_stock(product, quantity)?;
        self.items[idx].quantity = quantity;
        Ok(())
    }

    /// Clears all items. Idempotent.
    pub fn clear(&mut self) {
        debug!(item_count = self.items.len(), "clearing cart");
        self.items.clear();
        self.created_at = Utc::now();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The line items, in first-add order. Read-only view.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// A new vector of line items sorted ascending by the keyed product
    /// attribute. Stable: ties keep their first-add order.
    pub fn items_sorted(&self, key: SortKey) -> Vec<CartItem> {
        let mut items = self.items.clone();
        match key {
            SortKey::Price => items.sort_by_key(|item| item.product.price_cents),
            SortKey::Name => items.sort_by(|a, b| a.product.name.cmp(&b.product.name)),
        }
        items
    }

    /// The line quantity for a product, if present.
    pub fn quantity_of(&self, product: &Product) -> Option<i64> {
        self.position_of(product).map(|idx| self.items[idx].quantity)
    }

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all line items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.line_total())
    }

    /// Totals summary for reporting.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    // -------------------------------------------------------------------------
    // Calculations
    // -------------------------------------------------------------------------
    // All of these recompute from current contents and never mutate the
    // cart. Rates arrive as signed basis points (1000 = 10%) so negative
    // caller input is rejected instead of wrapping around.

    /// The total reduced by a percentage discount.
    ///
    /// ## Errors
    /// [`CartError::RateOutOfRange`] when `discount_bps` is outside
    /// 0..=10000.
    pub fn apply_discount(&self, discount_bps: i64) -> CartResult<Money> {
        let rate = validate_rate_bps(discount_bps)?;
        Ok(self.total().apply_discount(rate))
    }

    /// The total reduced by a discount that only applies at or above a
    /// minimum total.
    ///
    /// The rate is validated even when the minimum is not met: input
    /// validity does not depend on what happens to be in the cart.
    ///
    /// ## Errors
    /// [`CartError::RateOutOfRange`].
    pub fn apply_conditional_discount(
        &self,
        discount_bps: i64,
        minimum: Money,
    ) -> CartResult<Money> {
        let rate = validate_rate_bps(discount_bps)?;

        let total = self.total();
        if total >= minimum {
            Ok(total.apply_discount(rate))
        } else {
            Ok(total)
        }
    }

    /// The total reduced by a percentage coupon whose discount is capped
    /// at an absolute maximum.
    ///
    /// ```text
    /// total $400.00, 20% coupon capped at $50.00
    ///      │
    ///      ▼
    /// raw discount = $80.00 ──► capped to $50.00 ──► total $350.00
    /// ```
    ///
    /// ## Errors
    /// [`CartError::RateOutOfRange`],
    /// [`CartError::NegativeCouponCap`] (a negative cap is invalid no
    /// matter the rate).
    pub fn apply_coupon(&self, discount_bps: i64, cap: Money) -> CartResult<Money> {
        let rate = validate_rate_bps(discount_bps)?;
        validate_coupon_cap(cap)?;

        let total = self.total();
        let applied = total.rate_portion(rate).min(cap);
        Ok(total - applied)
    }

    /// The tax amount on the current total.
    ///
    /// ## Errors
    /// [`CartError::RateOutOfRange`] when `rate_bps` is outside 0..=10000.
    pub fn tax(&self, rate_bps: i64) -> CartResult<Money> {
        let rate = validate_rate_bps(rate_bps)?;
        Ok(self.total().rate_portion(rate))
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Index of the line item for a product. Matching is by product id,
    /// never by name.
    fn position_of(&self, product: &Product) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.product.id == product.id)
    }

    fn ensure_within_stock(product: &Product, requested: i64) -> CartResult<()> {
        if product.allows_quantity(requested) {
            return Ok(());
        }
        // Only reachable with a finite stock limit.
        Err(CartError::InsufficientStock {
            name: product.name.clone(),
            available: product.stock.unwrap_or_default(),
            requested,
        })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// CartTotals
// =============================================================================

/// Cart totals summary, a plain snapshot for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
