//! # Cart State
//!
//! Thread-safe wrapper around the core [`Cart`]. All cart math lives in
//! shopfront-core; this module only adds the Mutex and the summary DTO.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because multiple views (home grid,
//! results page, cart page) add to and read the same cart, and only one of
//! them may modify it at a time. Operations are quick; the lock is never held
//! across an await.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use shopfront_core::{price, Cart, CoreResult, Product};

/// Shared cart state.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    /// Adds one unit of a product (availability rules enforced in core).
    pub fn add(&self, product: &Product) -> CoreResult<()> {
        self.with_cart_mut(|cart| cart.add(product))
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }

    /// Snapshot of the cart totals for display.
    pub fn summary(&self) -> CartSummary {
        self.with_cart(|cart| CartSummary::from(cart))
    }
}

/// Cart totals for the navbar badge and the cart page header.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub entry_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub subtotal_display: String,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            entry_count: cart.entry_count(),
            total_quantity: cart.total_quantity(),
            subtotal_cents: cart.subtotal_cents(),
            subtotal_display: price::format_inr(cart.subtotal_cents()),
        }
    }
}
