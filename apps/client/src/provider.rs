//! # Catalog Provider Seam
//!
//! The external product-data provider: full product list, keyword search.
//! Consumed here, implemented by `shopfront-api` in production and by fakes
//! in tests.
//!
//! ## Why a Trait?
//! Controllers hold the provider generically, so every state test runs
//! against an in-process fake instead of a live catalog service. The real
//! implementation is a one-line delegation to [`CatalogClient`].

use std::future::Future;

use shopfront_api::{ApiError, CatalogClient};
use shopfront_core::Product;

/// Read access to the remote product catalog.
pub trait CatalogProvider: Send + Sync + 'static {
    /// Fetches the full product list.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;

    /// Searches the catalog by keyword.
    fn search(&self, keyword: &str) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;
}

impl CatalogProvider for CatalogClient {
    async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        CatalogClient::fetch_all(self).await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Product>, ApiError> {
        CatalogClient::search(self, keyword).await
    }
}

// =============================================================================
// Test Support
// =============================================================================
