//! # Store Error Types
//!
//! Error types for catalog persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error (file absent, unreadable)                           │
//! │       │                                                             │
//! │       ├────────────────► StoreError::Io                             │
//! │                                                                     │
//! │  serde_json::Error (not JSON, bad tag, missing/mistyped field)      │
//! │       │                                                             │
//! │       ├────────────────► StoreError::Malformed                      │
//! │                                                                     │
//! │  CoreError (invariant-violating record, duplicate id)               │
//! │       │                                                             │
//! │       └────────────────► StoreError::Invalid                        │
//! │                                                                     │
//! │  Callers can tell "file not found" apart from "corrupt content"     │
//! │  and report each precisely.                                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use stockline_core::CoreError;

/// Catalog persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying file could not be read or written.
    ///
    /// ## When This Occurs
    /// - File doesn't exist on load
    /// - Permissions problem, disk full
    #[error("Catalog I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but its content is not a valid catalog document.
    ///
    /// ## When This Occurs
    /// - Content is not JSON at all
    /// - The `type` tag is missing or unrecognized
    /// - A record is missing a required field or has a wrongly typed one
    #[error("Malformed catalog document: {0}")]
    Malformed(String),

    /// A record decoded cleanly but violates a domain invariant.
    ///
    /// ## When This Occurs
    /// - Non-positive price or negative stock in a record
    /// - An expiry date that doesn't parse as a calendar date
    /// - The same product id appearing twice in one document
    #[error("Invalid catalog content: {0}")]
    Invalid(#[from] CoreError),
}

/// Decoding failures all collapse to `Malformed`; the serde message
/// carries the detail (unknown tag, missing field, type mismatch).
impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Malformed(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
