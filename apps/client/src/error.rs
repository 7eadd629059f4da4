//! # Client Error Type
//!
//! Unified error type for the app layer: everything the view binds to.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Shopfront                              │
//! │                                                                         │
//! │  Catalog HTTP failure ─── ApiError::Transport ──┐                      │
//! │                                                 │                       │
//! │  Cart rule violation ──── CoreError::OutOfStock ┼──► ClientError ──►   │
//! │                                                 │    { code, message }  │
//! │  Bad input ────────────── ValidationError ──────┘                       │
//! │                                                                         │
//! │  The view switches on `code`; `message` is ready for display.           │
//! │  Network failures additionally degrade to empty/no-results state        │
//! │  inside the controllers - they never abort a view.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use shopfront_api::ApiError;
use shopfront_core::CoreError;

/// App-layer error: a machine-readable code plus a display message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes the view layer switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Search or catalog fetch failed; degraded to empty/no-results display.
    NetworkFailure,

    /// Referenced entity (product, cart entry) does not exist.
    NotFound,

    /// Input validation failed.
    ValidationError,

    /// Product is flagged unavailable by the catalog.
    Unavailable,

    /// Product has zero stock.
    OutOfStock,

    /// Cart limit violated.
    CartError,

    /// Anything else (configuration, persistence).
    Internal,
}

impl ClientError {
    /// Creates a new client error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ClientError {
            code,
            message: message.into(),
        }
    }

    /// Creates a network failure error.
    pub fn network(message: impl Into<String>) -> Self {
        ClientError::new(ErrorCode::NetworkFailure, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ClientError::new(ErrorCode::Internal, message)
    }
}

/// Converts catalog client errors.
impl From<ApiError> for ClientError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidBaseUrl { .. } => ClientError::internal(err.to_string()),
            ApiError::Transport(_)
            | ApiError::Status { .. }
            | ApiError::Decode(_)
            | ApiError::BadPrice { .. } => ClientError::network(err.to_string()),
        }
    }
}

/// Converts core domain errors.
impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ProductUnavailable { .. } => ErrorCode::Unavailable,
            CoreError::OutOfStock { .. } => ErrorCode::OutOfStock,
            CoreError::EntryNotFound { .. } => ErrorCode::NotFound,
            CoreError::CartTooLarge { .. } | CoreError::QuantityTooLarge { .. } => {
                ErrorCode::CartError
            }
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ClientError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ClientError = CoreError::OutOfStock {
            name: "Drone".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert!(err.message.contains("Drone"));

        let err: ClientError = CoreError::CartTooLarge { max: 100 }.into();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_api_error_maps_to_network_failure() {
        let err: ClientError = ApiError::Status { status: 502 }.into();
        assert_eq!(err.code, ErrorCode::NetworkFailure);
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = ClientError::network("search failed");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"NETWORK_FAILURE\""));
    }
}
