//! # shopfront-api: Remote Catalog Client
//!
//! This crate provides access to the remote product catalog over HTTP. It is
//! the only place in the workspace that talks to the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Data Flow                               │
//! │                                                                         │
//! │  SearchController / CatalogState (apps/client)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shopfront-api (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CatalogClient │    │   Wire DTOs   │    │   ApiError   │  │   │
//! │  │   │  (client.rs)  │    │   (dto.rs)    │    │  (error.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ reqwest com-  │◄───│ camelCase     │    │ Transport    │  │   │
//! │  │   │ mon plumbing  │    │ JSON ↔ domain │    │ Status       │  │   │
//! │  │   └───────────────┘    └───────────────┘    │ Decode       │  │   │
//! │  │                                             └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base}/api/products                                                │
//! │  GET {base}/api/products/search?keyword={q}                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopfront_api::{ApiConfig, CatalogClient};
//!
//! let config = ApiConfig::from_env()?;
//! let client = CatalogClient::new(config)?;
//!
//! let all = client.fetch_all().await?;
//! let hits = client.search("headphone").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod dto;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{ApiConfig, CatalogClient};
pub use dto::ProductDto;
pub use error::{ApiError, ApiResult};
