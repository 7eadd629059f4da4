//! # Home View Model
//!
//! The product grid: catalog list projected through the category filter,
//! with the error placeholder and empty state handled up front.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render_home(catalog, filter)                                           │
//! │       │                                                                 │
//! │       ├── catalog.is_error() ──► HomeView::Error  (fixed placeholder)   │
//! │       ├── projection empty   ──► HomeView::Empty ("No Products …")      │
//! │       └── otherwise          ──► HomeView::Grid(cards)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::provider::CatalogProvider;
use crate::state::CatalogState;
use shopfront_core::{Category, Product};

/// Caption on an enabled add-to-cart button.
pub const ADD_TO_CART_LABEL: &str = "Add to Cart";

/// Caption on a disabled add-to-cart button.
pub const OUT_OF_STOCK_LABEL: &str = "Out of Stock";

/// One card in the product grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    /// Name as the grid displays it (upper-cased).
    pub display_name: String,
    pub brand: String,
    pub category_label: &'static str,
    pub price_display: String,
    /// Always renderable (placeholder when the catalog sent nothing).
    pub image_src: String,
    /// Dim the card when the catalog flags the product off.
    pub available: bool,
    /// Enabled iff available AND in stock.
    pub add_to_cart_enabled: bool,
    pub action_label: &'static str,
}

impl ProductCard {
    /// Builds a card from a catalog product.
    pub fn from_product(product: &Product) -> Self {
        let enabled = product.can_add_to_cart();
        ProductCard {
            id: product.id.clone(),
            display_name: product.name.to_uppercase(),
            brand: product.brand.clone(),
            category_label: product.category.label(),
            price_display: product.display_price(),
            image_src: product.image_source(),
            available: product.product_available,
            add_to_cart_enabled: enabled,
            action_label: if enabled {
                ADD_TO_CART_LABEL
            } else {
                OUT_OF_STOCK_LABEL
            },
        }
    }
}

/// What the home view renders.
#[derive(Debug)]
pub enum HomeView {
    /// Catalog fetch failed: fixed error placeholder.
    Error,
    /// No products (after filtering).
    Empty,
    /// The grid.
    Grid(Vec<ProductCard>),
}

/// Builds the home view from catalog state and the optional category filter.
pub fn render_home<P: CatalogProvider>(
    catalog: &CatalogState<P>,
    filter: Option<Category>,
) -> HomeView {
    if catalog.is_error() {
        return HomeView::Error;
    }

    let products = catalog.filtered(filter);
    if products.is_empty() {
        return HomeView::Empty;
    }

    HomeView::Grid(products.iter().map(ProductCard::from_product).collect())
}
