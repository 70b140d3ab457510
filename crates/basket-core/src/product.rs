//! # Product
//!
//! The purchasable item value type.
//!
//! ## Dual-Key Identity Pattern
//! - `id`: UUID v4, immutable, drives line-item matching
//! - `name`: human-readable label, may be empty, never required unique
//!
//! Two products with the same name are still two different products; a
//! cart matches line items by `id` alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CartResult;
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_stock_limit};

/// A product available for sale.
///
/// Immutable once constructed; the cart never writes to a product. Shared
/// into carts as `Arc<Product>` so a line item references the same value
/// the caller holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (UUID v4). Line-item matching key.
    pub id: Uuid,

    /// Display label. May be empty; not required unique.
    pub name: String,

    /// Price in cents (smallest currency unit). Never negative.
    pub price_cents: i64,

    /// Maximum quantity of this product allowed in a cart.
    /// `None` means unlimited (the default).
    pub stock: Option<i64>,

    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product with unlimited stock.
    ///
    /// Fails if the price is negative.
    ///
    /// ```rust
    /// use basket_core::Product;
    ///
    /// let laptop = Product::new("Laptop", 100_000).unwrap(); // $1000.00
    /// assert_eq!(laptop.price_cents, 100_000);
    /// assert!(laptop.stock.is_none());
    ///
    /// assert!(Product::new("Broken", -1).is_err());
    /// ```
    pub fn new(name: impl Into<String>, price_cents: i64) -> CartResult<Self> {
        validate_price_cents(price_cents)?;

        Ok(Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price_cents,
            stock: None,
            created_at: Utc::now(),
        })
    }

    /// Creates a product with a per-cart stock limit.
    ///
    /// Fails if the price is negative or the limit is not positive.
    pub fn with_stock(name: impl Into<String>, price_cents: i64, stock: i64) -> CartResult<Self> {
        validate_price_cents(price_cents)?;
        validate_stock_limit(stock)?;

        Ok(Product {
            id: Uuid::new_v4(),
            name: name.into(),
            price_cents,
            stock: Some(stock),
            created_at: Utc::now(),
        })
    }

    /// The price as a Money value.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether a cart may hold `quantity` units of this product.
    pub fn allows_quantity(&self, quantity: i64) -> bool {
        match self.stock {
            Some(limit) => quantity <= limit,
            None => true,
        }
    }
}
