//! # shopfront-core: Pure Storefront Logic for Shopfront
//!
//! This crate is the **heart** of the Shopfront client. It contains all
//! storefront behavior as pure functions and state machines with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shopfront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/client                                  │   │
//! │  │    SearchController ──► CatalogState ──► CartNotifier          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  search   │  │   cart    │  │  notify   │  │   │
//! │  │   │  Product  │  │SearchState│  │   Cart    │  │   Toast   │  │   │
//! │  │   │  Category │  │sequencing │  │ CartEntry │  │  content  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                shopfront-api (Catalog Client)                   │   │
//! │  │            HTTP search & fetch-all over reqwest                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Theme)
//! - [`search`] - Search result state with stale-response sequencing
//! - [`cart`] - Cart and cart entries (snapshot pattern)
//! - [`notify`] - Toast notification content and state
//! - [`image`] - Image source resolution (base64 / data URI / URL)
//! - [`price`] - Locale price formatting (integer cents, no floats)
//! - [`text`] - Description preview truncation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, timer and file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices are cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod image;
pub mod notify;
pub mod price;
pub mod search;
pub mod text;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Product` instead of
// `use shopfront_core::types::Product`

pub use cart::{Cart, CartEntry};
pub use error::{CoreError, CoreResult, ValidationError};
pub use notify::{Toast, ToastContent};
pub use search::{RequestSeq, SearchState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// How long an add-to-cart notification stays visible before auto-dismissal,
/// in milliseconds.
///
/// The app layer owns the actual timer; the core only defines the contract:
/// Hidden → Shown → Hidden after exactly this delay absent further action.
pub const TOAST_DISMISS_MS: u64 = 3000;

/// Hard cutoff for description previews, in characters (not bytes).
///
/// Descriptions longer than this render as the first 100 characters plus an
/// ellipsis; shorter ones render unchanged.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Fallback image shown when a product carries no image payload.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// MIME type assumed for raw base64 image payloads that carry no type hint.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Maximum unique entries allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single entry in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., clicking add 1000 times).
pub const MAX_ITEM_QUANTITY: i64 = 999;
