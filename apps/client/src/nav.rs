//! # Navigation State
//!
//! Routes and the ephemeral state passed between views. Navigation payloads
//! are not a durable store: a payload is consumed exactly once, on arrival.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Navigation Payload Flow                              │
//! │                                                                         │
//! │  SearchController::submit                                               │
//! │       │  navigate_with(SearchResults, Keyword | Results)                │
//! │       ▼                                                                 │
//! │  ResultsView mount ──► take_payload()                                   │
//! │       │                                                                 │
//! │       ├── Some(payload) ──► render results                              │
//! │       └── None ──► redirect Home   (direct URL hit / refresh)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use shopfront_core::Product;

/// The client's routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Product grid with category filter.
    Home,
    /// Search results page.
    SearchResults,
    /// Product detail page.
    Product(String),
}

/// Ephemeral state carried by a navigation.
#[derive(Debug, Clone)]
pub enum NavPayload {
    /// The submitted search keyword; the destination fetches results itself.
    Keyword(String),
    /// A pre-fetched result list; the destination renders it directly.
    Results(Vec<Product>),
}

/// Current route plus the pending payload.
#[derive(Debug)]
pub struct Navigator {
    inner: Mutex<NavInner>,
}

#[derive(Debug)]
struct NavInner {
    route: Route,
    payload: Option<NavPayload>,
}

impl Navigator {
    /// Starts at Home with no payload.
    pub fn new() -> Self {
        Navigator {
            inner: Mutex::new(NavInner {
                route: Route::Home,
                payload: None,
            }),
        }
    }

    /// The current route.
    pub fn current(&self) -> Route {
        self.lock().route.clone()
    }

    /// Navigates without a payload. Any undelivered payload is dropped.
    pub fn navigate(&self, route: Route) {
        let mut inner = self.lock();
        inner.route = route;
        inner.payload = None;
    }

    /// Navigates carrying ephemeral state for the destination.
    pub fn navigate_with(&self, route: Route, payload: NavPayload) {
        let mut inner = self.lock();
        inner.route = route;
        inner.payload = Some(payload);
    }

    /// Consumes the pending payload. Second and later calls return None,
    /// which is exactly the refresh/direct-URL case.
    pub fn take_payload(&self) -> Option<NavPayload> {
        self.lock().payload.take()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NavInner> {
        self.inner.lock().expect("Navigator mutex poisoned")
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Route::Home);
        assert!(nav.take_payload().is_none());
    }

    #[test]
    fn test_payload_consumed_once() {
        let nav = Navigator::new();
        nav.navigate_with(Route::SearchResults, NavPayload::Keyword("phone".into()));

        assert_eq!(nav.current(), Route::SearchResults);
        assert!(matches!(
            nav.take_payload(),
            Some(NavPayload::Keyword(k)) if k == "phone"
        ));
        // Consumed: a refresh sees nothing.
        assert!(nav.take_payload().is_none());
    }

    #[test]
    fn test_plain_navigation_drops_stale_payload() {
        let nav = Navigator::new();
        nav.navigate_with(Route::SearchResults, NavPayload::Keyword("phone".into()));
        nav.navigate(Route::Home);

        assert!(nav.take_payload().is_none());
    }
}
