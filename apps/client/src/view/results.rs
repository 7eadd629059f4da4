//! # Results View Model
//!
//! The search-results page. Mounting reads the navigation payload; a page
//! opened without one (direct URL hit, refresh) redirects Home, because
//! results are not independently re-fetchable from stored state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  mount_results(nav, provider)                                           │
//! │       │ take_payload()                                                  │
//! │       ├── Results(list) ──► render directly                             │
//! │       ├── Keyword(k)    ──► provider.search(k), render (errors → empty) │
//! │       └── None          ──► navigate(Home), RedirectedHome              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{error, warn};

use crate::nav::{NavPayload, Navigator, Route};
use crate::provider::CatalogProvider;
use crate::view::home::{ADD_TO_CART_LABEL, OUT_OF_STOCK_LABEL};
use shopfront_core::{text, Product};

/// One card on the results page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultCard {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category_label: &'static str,
    /// Description cut at 100 characters + ellipsis.
    pub description_preview: String,
    /// Locale-formatted price.
    pub price_display: String,
    /// Always renderable.
    pub image_src: String,
    pub add_to_cart_enabled: bool,
    pub action_label: &'static str,
}

impl ResultCard {
    /// Builds a card from a search hit.
    pub fn from_product(product: &Product) -> Self {
        let enabled = product.can_add_to_cart();
        ResultCard {
            id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category_label: product.category.label(),
            description_preview: text::truncate_description(
                product.description.as_deref().unwrap_or(""),
            ),
            price_display: product.display_price(),
            image_src: product.image_source(),
            add_to_cart_enabled: enabled,
            action_label: if enabled {
                ADD_TO_CART_LABEL
            } else {
                OUT_OF_STOCK_LABEL
            },
        }
    }
}

/// Outcome of mounting the results page.
#[derive(Debug)]
pub enum ResultsMount {
    /// Cards ready to render; empty means "No products found."
    Ready(Vec<ResultCard>),
    /// No navigation state was present; the navigator now points Home.
    RedirectedHome,
}

impl ResultsMount {
    /// Number of rendered result cards (the "N product(s) found" counter).
    pub fn result_count(&self) -> usize {
        match self {
            ResultsMount::Ready(cards) => cards.len(),
            ResultsMount::RedirectedHome => 0,
        }
    }
}

/// Mounts the results page: consumes the navigation payload and builds the
/// view, redirecting Home when the payload is absent.
pub async fn mount_results<P: CatalogProvider>(
    nav: &Navigator,
    provider: &P,
) -> ResultsMount {
    let products = match nav.take_payload() {
        Some(NavPayload::Results(list)) => list,
        Some(NavPayload::Keyword(keyword)) => match provider.search(&keyword).await {
            Ok(list) => list,
            Err(err) => {
                // Degrade to the "No products found." display.
                error!(keyword = %keyword, error = %err, "results search failed");
                Vec::new()
            }
        },
        None => {
            warn!("results page opened without navigation state, redirecting home");
            nav.navigate(Route::Home);
            return ResultsMount::RedirectedHome;
        }
    };

    ResultsMount::Ready(products.iter().map(ResultCard::from_product).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::testing::{product, FakeProvider};

    #[tokio::test]
    async fn mount_with_prefetched_results_renders_them() {
        let nav = Navigator::new();
        let provider = FakeProvider::new();
        nav.navigate_with(
            Route::SearchResults,
            NavPayload::Results(vec![product("1", "Phone A"), product("2", "Phone B")]),
        );

        let mount = mount_results(&nav, &provider).await;

        assert_eq!(mount.result_count(), 2);
        assert_eq!(nav.current(), Route::SearchResults);
    }

    #[tokio::test]
    async fn mount_with_keyword_fetches_results() {
        let nav = Navigator::new();
        let provider = FakeProvider::new();
        provider.set_results("laptop", vec![product("1", "Gaming Laptop")]);
        nav.navigate_with(Route::SearchResults, NavPayload::Keyword("laptop".into()));

        let mount = mount_results(&nav, &provider).await;

        let ResultsMount::Ready(cards) = mount else {
            panic!("expected ready");
        };
        assert_eq!(cards[0].name, "Gaming Laptop");
    }

    #[tokio::test]
    async fn mount_without_state_redirects_home() {
        // Direct URL hit: navigator points at the results route but carries
        // no payload.
        let nav = Navigator::new();
        let provider = FakeProvider::new();
        nav.navigate(Route::SearchResults);

        let mount = mount_results(&nav, &provider).await;

        assert!(matches!(mount, ResultsMount::RedirectedHome));
        assert_eq!(nav.current(), Route::Home);
    }

    #[tokio::test]
    async fn refresh_after_mount_redirects_home() {
        let nav = Navigator::new();
        let provider = FakeProvider::new();
        nav.navigate_with(Route::SearchResults, NavPayload::Results(vec![product("1", "A")]));

        // First mount consumes the payload…
        let first = mount_results(&nav, &provider).await;
        assert_eq!(first.result_count(), 1);

        // …so a refresh finds nothing and redirects.
        nav.navigate(Route::SearchResults);
        let second = mount_results(&nav, &provider).await;
        assert!(matches!(second, ResultsMount::RedirectedHome));
    }

    #[tokio::test]
    async fn keyword_fetch_failure_degrades_to_empty() {
        let nav = Navigator::new();
        let provider = FakeProvider::new();
        provider.fail_requests(true);
        nav.navigate_with(Route::SearchResults, NavPayload::Keyword("x".into()));

        let mount = mount_results(&nav, &provider).await;

        assert!(matches!(mount, ResultsMount::Ready(cards) if cards.is_empty()));
    }

    #[tokio::test]
    async fn long_description_is_truncated_on_the_card() {
        let nav = Navigator::new();
        let provider = FakeProvider::new();
        let mut p = product("1", "Phone");
        p.description = Some("d".repeat(140));
        nav.navigate_with(Route::SearchResults, NavPayload::Results(vec![p]));

        let ResultsMount::Ready(cards) = mount_results(&nav, &provider).await else {
            panic!("expected ready");
        };
        assert_eq!(cards[0].description_preview.chars().count(), 101);
        assert!(cards[0].description_preview.ends_with('…'));
    }

    #[tokio::test]
    async fn unavailable_result_card_is_disabled() {
        let nav = Navigator::new();
        let provider = FakeProvider::new();
        let mut p = product("1", "Phone");
        p.product_available = false;
        nav.navigate_with(Route::SearchResults, NavPayload::Results(vec![p]));

        let ResultsMount::Ready(cards) = mount_results(&nav, &provider).await else {
            panic!("expected ready");
        };
        assert!(!cards[0].add_to_cart_enabled);
        assert_eq!(cards[0].action_label, OUT_OF_STOCK_LABEL);
    }
}
