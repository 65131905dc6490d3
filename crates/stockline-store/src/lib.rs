//! # stockline-store: Persistence Layer for Stockline
//!
//! This crate provides catalog persistence for the Stockline inventory.
//! It writes and reads the whole catalog as a single JSON document.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Stockline Data Flow                             │
//! │                                                                     │
//! │  Caller ("save inventory" / "load inventory")                       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 stockline-store (THIS CRATE)                  │ │
//! │  │                                                               │ │
//! │  │   ┌──────────────────┐        ┌──────────────────┐           │ │
//! │  │   │  CatalogStore    │        │  CatalogDocument │           │ │
//! │  │   │  (catalog.rs)    │───────►│  {"products":[]} │           │ │
//! │  │   │  save/load/      │        │  record codec    │           │ │
//! │  │   │  load_into       │        │                  │           │ │
//! │  │   └──────────────────┘        └──────────────────┘           │ │
//! │  └──────────────────────────────┬────────────────────────────────┘ │
//! │                                 │                                   │
//! │                                 ▼                                   │
//! │                      catalog.json (whole-document                   │
//! │                      synchronous read/write)                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - Catalog document codec and the file-backed store
//! - [`error`] - Store error types (I/O vs corrupt content)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stockline_core::Inventory;
//! use stockline_store::CatalogStore;
//!
//! # fn main() -> Result<(), stockline_store::StoreError> {
//! let store = CatalogStore::new("catalog.json");
//!
//! let mut inventory = Inventory::new();
//! store.save(&inventory)?;
//!
//! // All-or-nothing: on failure `inventory` keeps its previous contents
//! store.load_into(&mut inventory)?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{read_document, write_document, CatalogDocument, CatalogStore};
pub use error::{StoreError, StoreResult};
