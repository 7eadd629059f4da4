//! # Cart
//!
//! The shopping cart and its entries. Pure data and math; the thread-safe
//! wrapper lives in the app layer.
//!
//! ## Snapshot Pattern
//! A cart entry freezes the product data (name, brand, price, image) at the
//! moment of adding. If the catalog updates a product afterwards, the cart
//! keeps displaying what the shopper actually added.
//!
//! ## Invariants
//! - Entries are unique by `product_id` (re-adding increments quantity)
//! - Quantity is always > 0
//! - Adding requires `product_available && stock_quantity > 0`
//! - At most [`MAX_CART_ITEMS`](crate::MAX_CART_ITEMS) entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Entry
// =============================================================================

/// One line in the cart: a frozen product snapshot plus a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    /// Product ID (UUID) for catalog lookups.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Brand at time of adding (frozen).
    pub brand: String,

    /// Price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Image payload at time of adding (frozen), for the toast thumbnail.
    pub image_data: Option<String>,

    /// Quantity in cart. Always > 0.
    pub quantity: i64,

    /// When this entry was first added.
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Creates a cart entry from a product, freezing its display data.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            unit_price_cents: product.price_cents,
            image_data: product.image_data.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Entries in the cart, in add order.
    pub entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of a product, or increments the quantity if the product
    /// is already in the cart.
    ///
    /// ## Errors
    /// - [`CoreError::ProductUnavailable`] when the catalog flags it off
    /// - [`CoreError::OutOfStock`] when stock is zero
    /// - [`CoreError::QuantityTooLarge`] / [`CoreError::CartTooLarge`] on
    ///   the cart limits
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        if !product.product_available {
            return Err(CoreError::ProductUnavailable {
                name: product.name.clone(),
            });
        }
        if product.stock_quantity == 0 {
            return Err(CoreError::OutOfStock {
                name: product.name.clone(),
            });
        }

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.product_id == product.id)
        {
            let new_qty = entry.quantity + 1;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            entry.quantity = new_qty;
            return Ok(());
        }

        if self.entries.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        self.entries.push(CartEntry::from_product(product, 1));
        Ok(())
    }

    /// Removes an entry by product ID.
    pub fn remove(&mut self, product_id: &str) -> CoreResult<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.product_id != product_id);

        if self.entries.len() == before {
            Err(CoreError::EntryNotFound {
                product_id: product_id.to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of unique entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total quantity across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Subtotal in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.entries.iter().map(|e| e.line_total_cents()).sum()
    }

    /// Whether the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
