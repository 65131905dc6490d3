//! # Validation Module
//!
//! Input validation utilities for Stockline.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Interactive surface (outside this workspace)              │
//! │  ├── Basic format checks (empty input, reprompting)                 │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  ├── Strictly positive quantities and prices                        │
//! │  └── Expiry dates that actually parse                               │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Record decoding (stockline-store)                         │
//! │  └── Every loaded record re-runs these rules                        │
//! │                                                                     │
//! │  Defense in depth: corrupt catalog files hit the same rules as      │
//! │  live input                                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockline_core::validation::{validate_quantity, validate_price};
//! use stockline_core::money::Money;
//!
//! // Validate quantity before a sell/restock
//! validate_quantity(5, "quantity").unwrap();
//!
//! // Validate price before constructing or repricing a product
//! validate_price(Money::from_cents(1099)).unwrap();
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::EXPIRY_DATE_FORMAT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sell/restock quantity.
///
/// ## Rules
/// - Must be strictly positive (> 0); zero and negative amounts are
///   rejected
///
/// ## Example
/// ```rust
/// use stockline_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5, "quantity").is_ok());
/// assert!(validate_quantity(0, "quantity").is_err());
/// assert!(validate_quantity(-3, "restock amount").is_err());
/// ```
pub fn validate_quantity(qty: i64, field: &str) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive (> 0); free and negative prices are
///   rejected both at construction and on every reprice
///
/// ## Example
/// ```rust
/// use stockline_core::money::Money;
/// use stockline_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an initial stock level.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero is allowed (a listed but
///   out-of-stock product)
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity_in_stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a grocery expiry date in `YYYY-MM-DD` form.
///
/// ## Example
/// ```rust
/// use stockline_core::validation::parse_expiry_date;
///
/// assert!(parse_expiry_date("2026-08-01").is_ok());
/// assert!(parse_expiry_date("01-08-2026").is_err());
/// assert!(parse_expiry_date("not-a-date").is_err());
/// ```
pub fn parse_expiry_date(raw: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), EXPIRY_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: "expiry_date".to_string(),
            reason: "must be a calendar date in YYYY-MM-DD form".to_string(),
        }
    })
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (an empty substring matches every product)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
