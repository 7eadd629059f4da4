//! # Shopfront Client Library
//!
//! Headless application layer for the Shopfront storefront: controllers,
//! shared state, navigation, and view models. A renderer (desktop shell,
//! TUI, whatever) binds to [`AppState`] and the view modules; all visual
//! layout is out of scope here.
//!
//! ## Module Organization
//! ```text
//! shopfront_client/
//! ├── lib.rs          ◄─── You are here (AppState wiring & tracing init)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── search.rs   ◄─── Search-as-you-type controller
//! │   ├── catalog.rs  ◄─── Product list + category filter
//! │   ├── cart.rs     ◄─── Cart state (Arc<Mutex<Cart>>)
//! │   ├── notifier.rs ◄─── Toast with 3s auto-dismiss
//! │   └── theme.rs    ◄─── Persisted theme preference
//! ├── view/
//! │   ├── home.rs     ◄─── Product grid view model
//! │   └── results.rs  ◄─── Search results view model
//! ├── nav.rs          ◄─── Routes + ephemeral navigation payload
//! ├── provider.rs     ◄─── Catalog provider seam
//! └── error.rs        ◄─── App-facing error type
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of ambient/global access the way the browser original shared its
//! context, every component receives exactly the state it reads, and all of
//! it hangs off one explicitly-passed [`AppState`]:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       AppState                                          │
//! │                                                                         │
//! │  ┌────────────────┐ ┌──────────────┐ ┌───────────┐ ┌───────────────┐   │
//! │  │SearchController│ │ CatalogState │ │ CartState │ │ NotifierState │   │
//! │  └────────────────┘ └──────────────┘ └───────────┘ └───────────────┘   │
//! │  ┌────────────────┐ ┌──────────────┐                                   │
//! │  │   ThemeState   │ │  Navigator   │                                   │
//! │  └────────────────┘ └──────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod nav;
pub mod provider;
pub mod state;
pub mod view;

use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use error::ClientError;
use nav::Navigator;
use provider::CatalogProvider;
use shopfront_api::{ApiConfig, CatalogClient};
use shopfront_core::Product;
use state::{CartState, CatalogState, NotifierState, SearchController, ThemeState, ThemeStore};

/// Everything the renderer binds to, wired over one catalog provider.
pub struct AppState<P> {
    pub search: SearchController<P>,
    pub catalog: CatalogState<P>,
    pub cart: CartState,
    pub notifier: NotifierState,
    pub theme: ThemeState,
    pub nav: Navigator,
}

impl<P: CatalogProvider> AppState<P> {
    /// Wires the state objects over a shared provider.
    pub fn new(provider: Arc<P>, theme_store: Option<ThemeStore>) -> Self {
        AppState {
            search: SearchController::new(provider.clone()),
            catalog: CatalogState::new(provider),
            cart: CartState::new(),
            notifier: NotifierState::new(),
            theme: ThemeState::load(theme_store),
            nav: Navigator::new(),
        }
    }

    /// Adds one unit of a product to the cart and shows the confirmation
    /// toast.
    ///
    /// This is THE add-to-cart path for every view - home grid and search
    /// results alike go through the shared cart, then the notification.
    ///
    /// ## Errors
    /// Availability and cart-limit violations from the core, translated to
    /// [`ClientError`]. The toast only shows on success.
    pub fn add_to_cart(&self, product: &Product) -> Result<(), ClientError> {
        self.cart.add(product)?;
        self.notifier.show(product);
        debug!(product_id = %product.id, name = %product.name, "product added to cart");
        Ok(())
    }
}

impl AppState<CatalogClient> {
    /// Builds the production state: catalog client from the environment,
    /// theme store in the platform data directory.
    pub fn from_env() -> Result<Self, ClientError> {
        let config = ApiConfig::from_env()?;
        let client = CatalogClient::new(config)?;
        Ok(AppState::new(Arc::new(client), ThemeStore::open_default()))
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront_client=trace` - Trace for this crate only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront_client=debug,shopfront_api=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::provider::testing::{product, FakeProvider};

    fn app() -> AppState<FakeProvider> {
        AppState::new(Arc::new(FakeProvider::new()), None)
    }

    #[tokio::test]
    async fn add_to_cart_updates_cart_and_shows_toast() {
        let app = app();
        let p = product("1", "Wireless Headphones");

        app.add_to_cart(&p).unwrap();

        assert_eq!(app.cart.summary().total_quantity, 1);
        assert!(app.notifier.is_shown());
        assert_eq!(
            app.notifier.content().unwrap().product_name,
            "Wireless Headphones"
        );
    }

    #[tokio::test]
    async fn add_to_cart_rejects_out_of_stock_without_toast() {
        let app = app();
        let mut p = product("1", "Drone");
        p.stock_quantity = 0;

        let err = app.add_to_cart(&p).unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert!(app.cart.with_cart(|c| c.is_empty()));
        assert!(!app.notifier.is_shown());
    }

    #[tokio::test]
    async fn results_page_add_to_cart_reaches_the_shared_cart() {
        // The two original storefronts disagreed here; this client always
        // integrates with the real cart.
        let app = app();
        let p = product("1", "Phone");

        app.add_to_cart(&p).unwrap();
        app.add_to_cart(&p).unwrap();

        assert_eq!(app.cart.summary().entry_count, 1);
        assert_eq!(app.cart.summary().total_quantity, 2);
    }
}
