//! # Search Controller
//!
//! Drives the navbar search box: search-as-you-type with a suggestion
//! dropdown, explicit submit to the results page, and stale-response
//! protection.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Search Flow                                          │
//! │                                                                         │
//! │  User types "headph"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  input_changed("headph")                                                │
//! │       │  blank? ──► clear state, hide dropdown, done                    │
//! │       ▼                                                                 │
//! │  begin_request → seq N, show dropdown                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /api/products/search?keyword=headph                                │
//! │       │                                                                 │
//! │       ├── Ok(results) ──► apply_response(N, …)  stale? discarded        │
//! │       └── Err(e)      ──► logged, apply_failure(N)  → no-results       │
//! │                                                                         │
//! │  Enter pressed ──► submit() ──► navigate to results, clear input        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//! State lives behind a std Mutex; the lock is released while the request is
//! in flight and re-acquired to apply the outcome, so concurrent
//! `input_changed` calls interleave freely and sequencing decides the winner.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, error};

use crate::nav::{NavPayload, Navigator, Route};
use crate::provider::CatalogProvider;
use shopfront_core::{Product, SearchState};

/// Controller behind the navbar search box.
pub struct SearchController<P> {
    provider: Arc<P>,
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    state: SearchState,
    dropdown_visible: bool,
}

impl<P> Clone for SearchController<P> {
    fn clone(&self) -> Self {
        SearchController {
            provider: self.provider.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<P: CatalogProvider> SearchController<P> {
    /// Creates a controller over the given catalog provider.
    pub fn new(provider: Arc<P>) -> Self {
        SearchController {
            provider,
            inner: Arc::new(Mutex::new(Inner {
                state: SearchState::new(),
                dropdown_visible: false,
            })),
        }
    }

    /// Handles one input change.
    ///
    /// Blank (trimmed) input clears everything and hides the dropdown.
    /// Anything else issues a keyword search and applies the response unless
    /// a newer request has been issued meanwhile.
    pub async fn input_changed(&self, value: &str) {
        let trimmed = value.trim().to_string();

        if trimmed.is_empty() {
            let mut inner = self.lock();
            inner.state.clear();
            inner.dropdown_visible = false;
            return;
        }

        let seq = {
            let mut inner = self.lock();
            inner.dropdown_visible = true;
            inner.state.begin_request(value)
        };

        match self.provider.search(&trimmed).await {
            Ok(results) => {
                let mut inner = self.lock();
                let applied = inner.state.apply_response(seq, results);
                if applied {
                    debug!(keyword = %trimmed, count = inner.state.results().len(), "search results applied");
                } else {
                    debug!(keyword = %trimmed, "stale search response discarded");
                }
            }
            Err(err) => {
                // No retry: log and degrade to the no-results display.
                error!(keyword = %trimmed, error = %err, "search request failed");
                let mut inner = self.lock();
                inner.state.apply_failure(seq);
            }
        }
    }

    /// Handles an explicit submit (Enter key / form submission).
    ///
    /// Navigates to the results page carrying the already-fetched list when
    /// the dropdown holds resolved results, or the keyword otherwise. Clears
    /// the input and hides the dropdown. Blank input is a no-op.
    pub fn submit(&self, nav: &Navigator) {
        let mut inner = self.lock();
        let keyword = inner.state.query().trim().to_string();
        if keyword.is_empty() {
            return;
        }

        let payload = if inner.state.is_settled() && !inner.state.results().is_empty() {
            NavPayload::Results(inner.state.take_results())
        } else {
            NavPayload::Keyword(keyword.clone())
        };

        debug!(keyword = %keyword, "search submitted");
        nav.navigate_with(Route::SearchResults, payload);
        inner.state.clear();
        inner.dropdown_visible = false;
    }

    /// Handles a click on a dropdown suggestion: clears the box and
    /// navigates to the product page.
    pub fn select_suggestion(&self, nav: &Navigator, product_id: &str) {
        {
            let mut inner = self.lock();
            inner.state.clear();
            inner.dropdown_visible = false;
        }
        nav.navigate(Route::Product(product_id.to_string()));
    }

    /// Current raw input.
    pub fn query(&self) -> String {
        self.lock().state.query().to_string()
    }

    /// Current dropdown results.
    pub fn results(&self) -> Vec<Product> {
        self.lock().state.results().to_vec()
    }

    /// Whether the suggestion dropdown is showing.
    pub fn dropdown_visible(&self) -> bool {
        self.lock().dropdown_visible
    }

    /// The "no results" notice flag.
    pub fn no_results(&self) -> bool {
        self.lock().state.no_results()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("Search state mutex poisoned")
    }
}
