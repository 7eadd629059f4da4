//! # Catalog State
//!
//! Holds the home view's product list: a one-time fetch on mount, an error
//! flag, and the category filter projection.
//!
//! ## Catalog Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Lifecycle                                    │
//! │                                                                         │
//! │  Home mounts ──► mount() ── first call? ──► refresh()                   │
//! │                     │                          │                        │
//! │                later calls: no-op              ▼                        │
//! │                                   GET /api/products                     │
//! │                                    │            │                       │
//! │                              Ok(products)   Err(logged)                 │
//! │                                    │            │                       │
//! │                              products set   error flag set              │
//! │                                    │            │                       │
//! │                                    ▼            ▼                       │
//! │                              grid renders   error placeholder           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The category filter never mutates the stored list; it is a projection
//! computed per call, so clearing the filter trivially restores the full
//! list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{error, info};

use crate::provider::CatalogProvider;
use shopfront_core::{Category, Product};

/// Product list state for the home view.
pub struct CatalogState<P> {
    provider: Arc<P>,
    inner: Mutex<Inner>,
    fetched: AtomicBool,
}

#[derive(Default)]
struct Inner {
    products: Vec<Product>,
    error: bool,
}

impl<P: CatalogProvider> CatalogState<P> {
    /// Creates catalog state over the given provider.
    pub fn new(provider: Arc<P>) -> Self {
        CatalogState {
            provider,
            inner: Mutex::new(Inner::default()),
            fetched: AtomicBool::new(false),
        }
    }

    /// One-time fetch on mount. Later calls are no-ops; use
    /// [`CatalogState::refresh`] to force a re-fetch.
    pub async fn mount(&self) {
        if self.fetched.swap(true, Ordering::SeqCst) {
            return;
        }
        self.refresh().await;
    }

    /// Fetches the full product list, replacing the current one.
    ///
    /// On failure the error flag is set and the previous list is kept; the
    /// view renders the error placeholder while the flag is up.
    pub async fn refresh(&self) {
        match self.provider.fetch_all().await {
            Ok(products) => {
                info!(count = products.len(), "catalog refreshed");
                let mut inner = self.lock();
                inner.products = products;
                inner.error = false;
            }
            Err(err) => {
                error!(error = %err, "catalog fetch failed");
                self.lock().error = true;
            }
        }
    }

    /// The unfiltered product list.
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// The category filter projection: exact match, view-level only.
    ///
    /// `None` returns the unfiltered list. The stored list is never touched,
    /// so filtering is idempotent and non-destructive.
    pub fn filtered(&self, category: Option<Category>) -> Vec<Product> {
        let inner = self.lock();
        match category {
            None => inner.products.clone(),
            Some(c) => inner
                .products
                .iter()
                .filter(|p| p.category == c)
                .cloned()
                .collect(),
        }
    }

    /// Whether the last fetch failed.
    pub fn is_error(&self) -> bool {
        self.lock().error
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("Catalog state mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::testing::{product, FakeProvider};
    use shopfront_core::Category;

    fn catalog_with(products: Vec<Product>) -> (Arc<FakeProvider>, CatalogState<FakeProvider>) {
        let provider = Arc::new(FakeProvider::new());
        provider.set_all(products);
        let catalog = CatalogState::new(provider.clone());
        (provider, catalog)
    }

    fn with_category(mut p: Product, category: Category) -> Product {
        p.category = category;
        p
    }

    #[tokio::test]
    async fn mount_fetches_exactly_once() {
        let (provider, catalog) = catalog_with(vec![product("1", "A")]);

        catalog.mount().await;
        catalog.mount().await;
        catalog.mount().await;

        assert_eq!(provider.fetch_calls(), 1);
        assert_eq!(catalog.products().len(), 1);
    }

    #[tokio::test]
    async fn refresh_replaces_the_list() {
        let (provider, catalog) = catalog_with(vec![product("1", "A")]);
        catalog.mount().await;

        provider.set_all(vec![product("1", "A"), product("2", "B")]);
        catalog.refresh().await;

        assert_eq!(catalog.products().len(), 2);
    }

    #[tokio::test]
    async fn fetch_failure_sets_error_flag() {
        let (provider, catalog) = catalog_with(Vec::new());
        provider.fail_requests(true);

        catalog.mount().await;

        assert!(catalog.is_error());

        // A later successful refresh clears it.
        provider.fail_requests(false);
        catalog.refresh().await;
        assert!(!catalog.is_error());
    }

    #[tokio::test]
    async fn category_filter_is_exact_match() {
        let (_provider, catalog) = catalog_with(vec![
            with_category(product("1", "Laptop A"), Category::Laptop),
            with_category(product("2", "Headphone B"), Category::Headphone),
            with_category(product("3", "Laptop C"), Category::Laptop),
        ]);
        catalog.mount().await;

        let laptops = catalog.filtered(Some(Category::Laptop));
        assert_eq!(laptops.len(), 2);
        assert!(laptops.iter().all(|p| p.category == Category::Laptop));
    }

    #[tokio::test]
    async fn filter_is_idempotent_and_non_destructive() {
        let (_provider, catalog) = catalog_with(vec![
            with_category(product("1", "Laptop A"), Category::Laptop),
            with_category(product("2", "Headphone B"), Category::Headphone),
        ]);
        catalog.mount().await;
        let original = catalog.products();

        // Filter, filter again, then clear: the unfiltered list is unchanged.
        let once = catalog.filtered(Some(Category::Laptop));
        let twice = catalog.filtered(Some(Category::Laptop));
        assert_eq!(once, twice);

        assert_eq!(catalog.filtered(None), original);
        assert_eq!(catalog.products(), original);
    }
}
