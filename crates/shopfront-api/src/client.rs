//! # Catalog Client
//!
//! HTTP access to the remote product catalog.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Endpoints                                   │
//! │                                                                         │
//! │  fetch_all() ──► GET {base}/api/products                               │
//! │                  → JSON array of Product                                │
//! │                                                                         │
//! │  search(q)   ──► GET {base}/api/products/search?keyword={q}            │
//! │                  → JSON array of Product (server-ordered)               │
//! │                                                                         │
//! │  No pagination, no error envelope. Non-2xx → ApiError::Status.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::dto::ProductDto;
use crate::error::{ApiError, ApiResult};
use shopfront_core::Product;

/// Environment variable overriding the catalog base URL.
pub const BASE_URL_ENV: &str = "SHOPFRONT_API_URL";

/// Default catalog base URL for development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// =============================================================================
// Configuration
// =============================================================================

/// Catalog client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the catalog service.
    pub base_url: Url,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Creates a configuration from an explicit base URL.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(ApiConfig {
            base_url,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Creates a configuration from the environment.
    ///
    /// ## Environment Variables
    /// - `SHOPFRONT_API_URL`: catalog base URL (default: `http://localhost:8080`)
    pub fn from_env() -> ApiResult<Self> {
        let url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        ApiConfig::new(&url)
    }
}

// =============================================================================
// Catalog Client
// =============================================================================

/// HTTP client for the remote product catalog.
///
/// Cheap to clone; the inner reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl CatalogClient {
    /// Creates a new catalog client.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(CatalogClient { http, config })
    }

    /// Fetches the full product list.
    ///
    /// ## Returns
    /// All catalog products, in server order.
    pub async fn fetch_all(&self) -> ApiResult<Vec<Product>> {
        let url = self.endpoint(&["api", "products"])?;
        debug!(%url, "fetch_all request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    /// Searches the catalog by keyword.
    ///
    /// The keyword is sent as a URL-encoded `keyword` query parameter; the
    /// server performs the substring/token match over name and description.
    ///
    /// ## Arguments
    /// * `keyword` - Search term; callers pass it trimmed and non-empty
    ///
    /// ## Returns
    /// Matching products, server-ordered. An empty array is a valid response
    /// and drives the "no results" notice upstream.
    pub async fn search(&self, keyword: &str) -> ApiResult<Vec<Product>> {
        let url = self.endpoint(&["api", "products", "search"])?;
        debug!(%url, keyword, "search request");

        let response = self
            .http
            .get(url)
            .query(&[("keyword", keyword)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        Self::decode(response).await
    }

    /// Joins path segments onto the base URL.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.config.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::InvalidBaseUrl {
                    url: self.config.base_url.to_string(),
                    reason: "base URL cannot have path segments".to_string(),
                })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Checks the status and decodes the product array.
    async fn decode(response: reqwest::Response) -> ApiResult<Vec<Product>> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let dtos: Vec<ProductDto> = response.json().await.map_err(ApiError::from_reqwest)?;
        dtos.into_iter().map(Product::try_from).collect()
    }
}
