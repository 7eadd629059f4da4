//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Storefront domain errors                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shopfront-api errors (separate crate)                                 │
//! │  └── ApiError         - Catalog HTTP failures                          │
//! │                                                                         │
//! │  apps/client errors                                                    │
//! │  └── ClientError      - What the view layer sees (code + message)      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → ClientError → View     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, value, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core storefront errors.
///
/// These errors represent business rule violations. They should be caught
/// and translated to user-facing messages at the app boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The product is flagged unavailable by the catalog.
    ///
    /// ## When This Occurs
    /// - `product_available == false` on an add-to-cart attempt
    /// - The availability control should have been disabled upstream
    #[error("Product is not available for sale: {name}")]
    ProductUnavailable { name: String },

    /// The product has zero stock.
    ///
    /// ## When This Occurs
    /// - `stock_quantity == 0` on an add-to-cart attempt
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart click
    ///      │
    ///      ▼
    /// Check: available? stock > 0?
    ///      │
    ///      ▼
    /// OutOfStock { name: "Wireless Headphones" }
    ///      │
    ///      ▼
    /// UI shows: "Out of Stock" (button disabled)
    /// ```
    #[error("Product is out of stock: {name}")]
    OutOfStock { name: String },

    /// Cart entry lookup failed.
    #[error("Product not in cart: {product_id}")]
    EntryNotFound { product_id: String },

    /// Cart has exceeded maximum allowed entries.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Entry quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when input from the view or the wire doesn't meet
/// requirements. Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value is not part of the fixed category set.
    #[error("Unknown category: {value}")]
    UnknownCategory { value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            name: "Gaming Laptop".to_string(),
        };
        assert_eq!(err.to_string(), "Product is out of stock: Gaming Laptop");

        let err = CoreError::CartTooLarge { max: 100 };
        assert_eq!(err.to_string(), "Cart cannot have more than 100 items");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::UnknownCategory {
            value: "Groceries".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown category: Groceries");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::UnknownCategory {
            value: "Groceries".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
