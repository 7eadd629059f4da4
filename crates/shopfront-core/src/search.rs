//! # Search State
//!
//! Pure state machine behind the search-as-you-type flow. The app layer owns
//! the HTTP calls; this module owns the bookkeeping: what the current query
//! is, which results belong to it, and whether the "no results" notice shows.
//!
//! ## Request Sequencing
//! The original flow had no guard against out-of-order responses: a slow
//! request for "ip" could resolve after a fast request for "iphone" and
//! overwrite its results. Every request issued here gets a monotonically
//! increasing sequence number, and only a response carrying the LATEST
//! sequence is applied.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Stale Response Discard                               │
//! │                                                                         │
//! │  type "ip"      ──► begin_request("ip")      = seq 1                   │
//! │  type "iphone"  ──► begin_request("iphone")  = seq 2                   │
//! │                                                                         │
//! │  response for seq 2 arrives ──► apply_response(2, …)  APPLIED          │
//! │  response for seq 1 arrives ──► apply_response(1, …)  DISCARDED        │
//! │                                                                         │
//! │  Displayed results always belong to the newest query.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Product;

/// Sequence number identifying one issued search request.
///
/// Opaque to callers: obtained from [`SearchState::begin_request`] and handed
/// back to `apply_response` / `apply_failure` when the request resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestSeq(u64);

/// State behind the search box: current input, last-applied results, and the
/// derived "no results" flag.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Raw input as typed (not trimmed).
    query: String,

    /// Last-applied result list, server-ordered.
    results: Vec<Product>,

    /// Sequence of the newest issued request. Responses carrying anything
    /// older are stale and discarded.
    latest: u64,

    /// Whether the newest request has resolved (success or failure). Guards
    /// the no-results flag while a request is still in flight.
    settled: bool,
}

impl SearchState {
    /// Creates an empty search state.
    pub fn new() -> Self {
        SearchState::default()
    }

    /// Records a new query and issues a request sequence for it.
    ///
    /// Call this only for non-blank queries; blank input goes through
    /// [`SearchState::clear`] instead.
    pub fn begin_request(&mut self, query: &str) -> RequestSeq {
        self.query = query.to_string();
        self.latest += 1;
        self.settled = false;
        RequestSeq(self.latest)
    }

    /// Clears input and results (the blank-query path).
    ///
    /// Also invalidates any in-flight request: its response will arrive with
    /// an old sequence and be discarded.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.latest += 1;
        self.settled = false;
    }

    /// Applies a successful response.
    ///
    /// Returns `true` when the response was current and applied, `false` when
    /// it was stale and discarded.
    pub fn apply_response(&mut self, seq: RequestSeq, results: Vec<Product>) -> bool {
        if seq.0 != self.latest {
            return false;
        }
        self.results = results;
        self.settled = true;
        true
    }

    /// Applies a failed request: degrades to an empty result list.
    ///
    /// Returns `true` when the failure was current, `false` when stale.
    pub fn apply_failure(&mut self, seq: RequestSeq) -> bool {
        if seq.0 != self.latest {
            return false;
        }
        self.results.clear();
        self.settled = true;
        true
    }

    /// Current raw input.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Last-applied result list, server-ordered.
    pub fn results(&self) -> &[Product] {
        &self.results
    }

    /// Takes the result list, leaving the state empty.
    ///
    /// Used on submit to hand the already-fetched list to the results view
    /// without cloning.
    pub fn take_results(&mut self) -> Vec<Product> {
        self.settled = false;
        std::mem::take(&mut self.results)
    }

    /// Whether the newest request has resolved.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// The "no results" flag: query non-empty AND the resolved result list is
    /// empty. Never true while a request is still in flight.
    pub fn no_results(&self) -> bool {
        self.settled && !self.query.trim().is_empty() && self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            brand: "Acme".to_string(),
            description: None,
            price_cents: 1000,
            category: Category::Electronics,
            stock_quantity: 1,
            product_available: true,
            image_data: None,
        }
    }

    #[test]
    fn test_response_applied_for_latest_request() {
        let mut state = SearchState::new();
        let seq = state.begin_request("phone");

        assert!(state.apply_response(seq, vec![product("1"), product("2")]));
        assert_eq!(state.results().len(), 2);
        assert!(!state.no_results());
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut state = SearchState::new();
        let first = state.begin_request("ip");
        let second = state.begin_request("iphone");

        // Newer response lands first.
        assert!(state.apply_response(second, vec![product("iphone-15")]));
        // Older response arrives late and must not overwrite.
        assert!(!state.apply_response(first, vec![product("ipad")]));

        assert_eq!(state.results().len(), 1);
        assert_eq!(state.results()[0].id, "iphone-15");
    }

    #[test]
    fn test_clear_resets_and_invalidates_in_flight() {
        let mut state = SearchState::new();
        let seq = state.begin_request("laptop");
        state.clear();

        // Response for the cleared query is stale.
        assert!(!state.apply_response(seq, vec![product("1")]));
        assert!(state.results().is_empty());
        assert_eq!(state.query(), "");
        assert!(!state.no_results());
    }

    #[test]
    fn test_no_results_requires_settled_empty_response() {
        let mut state = SearchState::new();
        let seq = state.begin_request("zzz");

        // In flight: flag must stay off.
        assert!(!state.no_results());

        assert!(state.apply_response(seq, Vec::new()));
        assert!(state.no_results());
    }

    #[test]
    fn test_failure_degrades_to_empty_results() {
        let mut state = SearchState::new();
        let seq = state.begin_request("phone");
        state.apply_response(seq, vec![product("1")]);

        let retry = state.begin_request("phones");
        assert!(state.apply_failure(retry));
        assert!(state.results().is_empty());
        assert!(state.no_results());
    }

    #[test]
    fn test_stale_failure_discarded() {
        let mut state = SearchState::new();
        let first = state.begin_request("ip");
        let second = state.begin_request("iphone");

        state.apply_response(second, vec![product("1")]);
        assert!(!state.apply_failure(first));
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn test_take_results_empties_state() {
        let mut state = SearchState::new();
        let seq = state.begin_request("phone");
        state.apply_response(seq, vec![product("1"), product("2")]);

        let taken = state.take_results();
        assert_eq!(taken.len(), 2);
        assert!(state.results().is_empty());
    }
}
