//! # Error Types
//!
//! Domain-specific error types for stockline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockline-core errors (this file)                                  │
//! │  ├── CoreError        - Inventory and stock rule violations         │
//! │  └── ValidationError  - Input precondition failures                 │
//! │                                                                     │
//! │  stockline-store errors (separate crate)                            │
//! │  └── StoreError       - File I/O and catalog decoding failures      │
//! │                                                                     │
//! │  Flow: ValidationError → CoreError → StoreError → Caller            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, counts)
//! 3. Errors are enum variants, never String
//! 4. Every variant is a recoverable condition the caller can report

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent stock rule violations or inventory lookup
/// failures. They should be caught and translated to user-facing messages
/// by whatever surface drives the inventory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Product cannot be found.
    ///
    /// ## When This Occurs
    /// - Selling, restocking, repricing or removing an id that was never
    ///   added (or was already removed)
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with this id is already in the inventory.
    ///
    /// ## When This Occurs
    /// - `Inventory::add` with an id that is already a key
    /// - A loaded catalog document repeating an id
    #[error("Product ID '{id}' already exists")]
    DuplicateProduct { id: String },

    /// Insufficient stock to complete a sale.
    ///
    /// The message states available vs. requested so the caller can show
    /// exactly how short the stock is. The product's stock is left
    /// unchanged when this is returned.
    #[error("Not enough stock for {product_id}: available {available}, requested {requested}")]
    OutOfStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a value doesn't meet a precondition: a
/// non-positive price or quantity, an unparseable expiry date. They are
/// always recoverable by the caller correcting the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. an expiry date that is not YYYY-MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
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
            product_id: "E1".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for E1: available 3, requested 5"
        );

        let err = CoreError::DuplicateProduct {
            id: "E1".to_string(),
        };
        assert_eq!(err.to_string(), "Product ID 'E1' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be positive");

        let err = ValidationError::InvalidFormat {
            field: "expiry_date".to_string(),
            reason: "must be YYYY-MM-DD".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "expiry_date has invalid format: must be YYYY-MM-DD"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
