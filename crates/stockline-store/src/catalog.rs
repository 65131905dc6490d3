//! # Catalog Store
//!
//! Whole-document JSON persistence for an inventory.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Document                                 │
//! │                                                                     │
//! │  {                                                                  │
//! │    "products": [                                                    │
//! │      { "type": "Electronics", "product_id": "E1", ... },            │
//! │      { "type": "Grocery",     "product_id": "G1", ... },            │
//! │      { "type": "Clothing",    "product_id": "C1", ... }             │
//! │    ]                                                                │
//! │  }                                                                  │
//! │                                                                     │
//! │  Written pretty-printed; read back whole. Loads are                 │
//! │  all-or-nothing: a single bad record rejects the document and       │
//! │  leaves the live inventory exactly as it was.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use stockline_core::{Inventory, ProductRecord};

// =============================================================================
// Catalog Document
// =============================================================================

/// The persisted catalog: a flat list of product records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub products: Vec<ProductRecord>,
}

impl CatalogDocument {
    /// Snapshots an inventory into its document form, store order.
    pub fn from_inventory(inventory: &Inventory) -> Self {
        CatalogDocument {
            products: inventory.records(),
        }
    }

    /// Rebuilds an inventory from the document, all-or-nothing.
    pub fn into_inventory(self) -> StoreResult<Inventory> {
        Ok(Inventory::from_records(self.products)?)
    }
}

// =============================================================================
// Sink/Source Interface
// =============================================================================

/// Classifies a serde_json failure: transport problems surface as I/O,
/// everything else is a malformed document.
fn classify_json_error(err: serde_json::Error) -> StoreError {
    if err.is_io() {
        StoreError::Io(err.into())
    } else {
        StoreError::Malformed(err.to_string())
    }
}

/// Serializes an inventory as a pretty-printed catalog document into any
/// byte sink.
pub fn write_document<W: Write>(mut writer: W, inventory: &Inventory) -> StoreResult<()> {
    let document = CatalogDocument::from_inventory(inventory);
    serde_json::to_writer_pretty(&mut writer, &document).map_err(classify_json_error)?;
    writer.flush()?;
    Ok(())
}

/// Reads a catalog document from any byte source and rebuilds the
/// inventory, all-or-nothing.
pub fn read_document<R: Read>(reader: R) -> StoreResult<Inventory> {
    let document: CatalogDocument =
        serde_json::from_reader(reader).map_err(classify_json_error)?;
    document.into_inventory()
}

// =============================================================================
// Catalog Store
// =============================================================================

/// File-backed catalog persistence.
///
/// ## Usage
/// ```rust,ignore
/// let store = CatalogStore::new("catalog.json");
///
/// store.save(&inventory)?;
/// let restored = store.load()?;
/// ```
///
/// ## Known Limitation
/// `save` is a synchronous whole-file write with no partial-write
/// protection; a crash mid-write can corrupt the file. Accepted for the
/// single-process, single-owner deployment this targets.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Creates a store addressing the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogStore { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes the full inventory into the catalog file.
    ///
    /// ## Errors
    /// - [`StoreError::Io`] if the file can't be created or written
    pub fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        debug!(
            path = %self.path.display(),
            count = inventory.len(),
            "Saving catalog"
        );

        let file = File::create(&self.path)?;
        write_document(BufWriter::new(file), inventory)?;

        debug!(path = %self.path.display(), "Catalog saved");
        Ok(())
    }

    /// Reads the catalog file and rebuilds a fresh inventory.
    ///
    /// ## Errors
    /// - [`StoreError::Io`] - file absent or unreadable ("file not found")
    /// - [`StoreError::Malformed`] - content is not a valid document
    ///   ("corrupt content")
    /// - [`StoreError::Invalid`] - a record violates a domain invariant
    ///   or repeats a product id
    pub fn load(&self) -> StoreResult<Inventory> {
        debug!(path = %self.path.display(), "Loading catalog");

        let file = File::open(&self.path)?;
        let inventory = read_document(BufReader::new(file))?;

        debug!(
            path = %self.path.display(),
            count = inventory.len(),
            "Catalog loaded"
        );
        Ok(inventory)
    }

    /// Loads the catalog file and replaces `inventory`'s contents with it.
    ///
    /// All-or-nothing: the replacement happens only after the whole
    /// document has been read, decoded and validated. On any failure the
    /// target inventory is untouched, so a corrupt file never strands the
    /// caller with emptied state.
    pub fn load_into(&self, inventory: &mut Inventory) -> StoreResult<()> {
        *inventory = self.load()?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
