//! # stockline-core: Pure Business Logic for Stockline
//!
//! This crate is the **heart** of Stockline. It contains all inventory
//! business logic as pure, synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Stockline Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │            Interactive surface (external caller)              │ │
//! │  │     menus, prompts, message rendering - NOT in this repo      │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ stockline-core (THIS CRATE) ★                  │ │
//! │  │                                                               │ │
//! │  │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌───────────┐    │ │
//! │  │  │  product  │ │ inventory │ │   money   │ │ validation│    │ │
//! │  │  │  Product  │ │ Inventory │ │   Money   │ │   rules   │    │ │
//! │  │  │  variants │ │ add/sell/ │ │  (cents)  │ │   checks  │    │ │
//! │  │  │  records  │ │ search    │ │           │ │           │    │ │
//! │  │  └───────────┘ └───────────┘ └───────────┘ └───────────┘    │ │
//! │  │                                                               │ │
//! │  │  NO FILE SYSTEM • NO NETWORK • NO CONSOLE • PURE LOGIC       │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐ │
//! │  │               stockline-store (persistence layer)             │ │
//! │  │            JSON catalog documents, file save/load             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The product variants, stock rules, persisted record form
//! - [`inventory`] - The keyed in-memory store
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **No I/O**: File system, network, console access is FORBIDDEN here
//! 2. **Integer Money**: All monetary values are in cents (i64) to avoid
//!    float errors
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Single-threaded**: every operation runs to completion; the
//!    inventory is an explicitly passed value with one logical owner
//!
//! ## Example Usage
//!
//! ```rust
//! use stockline_core::{Inventory, Money, Product};
//!
//! let mut inventory = Inventory::new();
//! inventory
//!     .add(Product::electronics("E1", "Laptop", Money::from_cents(99999), 5, 2, "Lenovo")?)
//!     .unwrap();
//!
//! inventory.sell("E1", 3).unwrap();
//! assert_eq!(inventory.get("E1").unwrap().stock(), 2);
//! assert_eq!(inventory.total_value(), Money::from_cents(199998));
//! # Ok::<(), stockline_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod money;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockline_core::Money` instead of
// `use stockline_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use money::Money;
pub use product::{Product, ProductKind, ProductRecord, ProductType};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Persisted form of grocery expiry dates (ISO calendar date).
///
/// The same format string drives parsing on load and formatting on save,
/// so the record round trip cannot drift.
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";
