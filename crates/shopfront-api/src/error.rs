//! # Catalog Client Error Types
//!
//! Error types for catalog HTTP operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Transport failure (reqwest::Error)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (this module) ← Adds categorization: Transport/Status/Decode │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ClientError (in apps/client) ← Degrades to empty/no-results display   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no retry anywhere along this path: a failed search or catalog
//! fetch is logged and the view degrades gracefully.

use thiserror::Error;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    ///
    /// ## When This Occurs
    /// - `SHOPFRONT_API_URL` holds a malformed value
    /// - A caller passes a relative or scheme-less URL
    #[error("Invalid catalog base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The request never produced a response.
    ///
    /// ## When This Occurs
    /// - Catalog service is down or unreachable
    /// - DNS / TLS / timeout failures
    #[error("Failed to reach catalog service: {0}")]
    Transport(#[source] reqwest::Error),

    /// The catalog answered with a non-success status.
    ///
    /// The catalog exposes no error envelope, so the status code is all the
    /// context there is.
    #[error("Catalog endpoint returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON product array.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[source] reqwest::Error),

    /// A product arrived with a price that cannot be represented as cents.
    ///
    /// ## When This Occurs
    /// - The wire carries a non-finite price (`1e999` overflows to infinity)
    /// - The price in cents does not fit an `i64`
    #[error("Product '{id}' has an unrepresentable price: {price}")]
    BadPrice { id: String, price: f64 },
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Categorizes a reqwest error into Transport or Decode.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status { status: 503 };
        assert_eq!(err.to_string(), "Catalog endpoint returned HTTP 503");

        let err = ApiError::InvalidBaseUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert!(err.to_string().contains("not a url"));
    }
}
