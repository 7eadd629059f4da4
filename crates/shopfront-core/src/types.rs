//! # Domain Types
//!
//! Core domain types used throughout the Shopfront client.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │     Theme       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  Laptop         │   │  Light          │       │
//! │  │  name, brand    │   │  Headphone      │   │  Dark           │       │
//! │  │  price_cents    │   │  Mobile         │   └─────────────────┘       │
//! │  │  stock_quantity │   │  Electronics    │                             │
//! │  │  image_data     │   │  Toys, Fashion  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Availability Invariant
//! Add-to-cart is permitted iff `product_available == true` AND
//! `stock_quantity > 0`. Every control that offers the action derives its
//! enabled state from [`Product::can_add_to_cart`], never from raw fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::image;
use crate::price;

// =============================================================================
// Category
// =============================================================================

/// Product category - a fixed, closed set.
///
/// The category filter on the home view is an exact match over this enum,
/// applied purely as a view-level projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Laptop,
    Headphone,
    Mobile,
    Electronics,
    Toys,
    Fashion,
}

impl Category {
    /// All categories, in the order the navbar dropdown lists them.
    pub const ALL: [Category; 6] = [
        Category::Laptop,
        Category::Headphone,
        Category::Mobile,
        Category::Electronics,
        Category::Toys,
        Category::Fashion,
    ];

    /// Display label for the category badge and the dropdown.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Laptop => "Laptop",
            Category::Headphone => "Headphone",
            Category::Mobile => "Mobile",
            Category::Electronics => "Electronics",
            Category::Toys => "Toys",
            Category::Fashion => "Fashion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ValidationError::UnknownCategory {
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product from the remote catalog.
///
/// ## Image Data
/// `image_data` is whatever the catalog sent: a raw base64 payload, a full
/// `data:` URI, or an absolute URL. [`Product::image_source`] always resolves
/// it to a renderable value (placeholder when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on cards and in the search dropdown.
    pub name: String,

    /// Brand shown under the name.
    pub brand: String,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Price in cents (smallest currency unit). Wire prices are decimal and
    /// converted on ingest; the core never holds a floating-point price.
    pub price_cents: i64,

    /// Product category (closed set).
    pub category: Category,

    /// Units in stock. Never negative.
    pub stock_quantity: u32,

    /// Whether the catalog flags the product as sellable.
    pub product_available: bool,

    /// Raw image payload: base64, `data:` URI, or absolute URL.
    pub image_data: Option<String>,
}

impl Product {
    /// Checks whether add-to-cart is permitted for this product.
    ///
    /// This is THE availability invariant: true iff the product is flagged
    /// available AND has stock. Every "Add to Cart" control derives its
    /// enabled state from this.
    #[inline]
    pub fn can_add_to_cart(&self) -> bool {
        self.product_available && self.stock_quantity > 0
    }

    /// Resolves the image payload to a renderable source.
    ///
    /// ## Resolution Rules
    /// - Absent/empty payload → placeholder image
    /// - `data:` URI or absolute URL → passed through unchanged
    /// - Anything else → treated as base64 and wrapped in a `data:` URI
    pub fn image_source(&self) -> String {
        image::resolve_image_source(self.image_data.as_deref())
    }

    /// Formats the price for display with locale digit grouping.
    #[inline]
    pub fn display_price(&self) -> String {
        price::format_inr(self.price_cents)
    }
}

// =============================================================================
// Theme
// =============================================================================

/// UI theme preference.
///
/// Persisted by the app layer; mutates global presentation only. No business
/// logic reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default for first launch or missing preference).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Returns the opposite theme. The navbar toggle flips between the two.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(available: bool, stock: u32) -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Wireless Headphones".to_string(),
            brand: "Acme".to_string(),
            description: Some("Noise cancelling".to_string()),
            price_cents: 499_900,
            category: Category::Headphone,
            stock_quantity: stock,
            product_available: available,
            image_data: None,
        }
    }

    #[test]
    fn test_can_add_to_cart_requires_availability_and_stock() {
        assert!(product(true, 5).can_add_to_cart());
        assert!(!product(true, 0).can_add_to_cart());
        assert!(!product(false, 5).can_add_to_cart());
        assert!(!product(false, 0).can_add_to_cart());
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.label().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownCategory { .. }));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_product_serde_uses_camel_case() {
        let json = serde_json::to_string(&product(true, 3)).unwrap();
        assert!(json.contains("\"stockQuantity\":3"));
        assert!(json.contains("\"productAvailable\":true"));
        assert!(json.contains("\"imageData\":null"));
    }
}
