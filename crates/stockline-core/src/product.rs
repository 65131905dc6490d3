//! # Product Model
//!
//! The closed set of product variants and their stock-mutation rules.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Product Model                               │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │ Product                                                       │ │
//! │  │  ─────────────────────                                        │ │
//! │  │  id (unique key, immutable)                                   │ │
//! │  │  name                                                         │ │
//! │  │  price (Money, > 0)                                           │ │
//! │  │  stock (i64, >= 0)                                            │ │
//! │  │  kind ──────────────┐                                         │ │
//! │  └─────────────────────┼─────────────────────────────────────────┘ │
//! │                        ▼                                            │
//! │  ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐      │
//! │  │ Electronics     │ │ Grocery         │ │ Clothing        │      │
//! │  │ ─────────────   │ │ ─────────────   │ │ ─────────────   │      │
//! │  │ warranty_years  │ │ expiry_date     │ │ size            │      │
//! │  │ brand           │ │ (NaiveDate)     │ │ material        │      │
//! │  └─────────────────┘ └─────────────────┘ └─────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `price > 0` at all times (checked on construction and every reprice)
//! - `stock >= 0` at all times (a sell that would overdraw is rejected
//!   and leaves stock unchanged)
//! - Fields are private; stock moves only through [`Product::sell`] and
//!   [`Product::restock`], price only through [`Product::set_price`]
//!
//! ## Persisted Form
//! [`ProductRecord`] is the flat, tagged representation used by the
//! catalog document. Conversion is validated in both directions so the
//! round trip `Product::from_record(ProductRecord::from(&p)) == p` holds
//! for every valid product.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{
    parse_expiry_date, validate_price, validate_quantity, validate_stock,
};
use crate::EXPIRY_DATE_FORMAT;

// =============================================================================
// Product Type (discriminant)
// =============================================================================

/// The closed set of product variants, as a bare discriminant.
///
/// Used to request a variant in type searches and as the `type` tag of
/// the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    Electronics,
    Grocery,
    Clothing,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProductType::Electronics => "Electronics",
            ProductType::Grocery => "Grocery",
            ProductType::Clothing => "Clothing",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Product Kind (variant-specific attributes)
// =============================================================================

/// Variant-specific attributes of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    /// Electronic product with warranty and brand.
    Electronics { warranty_years: i64, brand: String },
    /// Grocery product with an expiry date.
    Grocery { expiry_date: NaiveDate },
    /// Clothing product with size and material.
    Clothing { size: String, material: String },
}

impl ProductKind {
    /// Returns the discriminant for this kind.
    pub fn product_type(&self) -> ProductType {
        match self {
            ProductKind::Electronics { .. } => ProductType::Electronics,
            ProductKind::Grocery { .. } => ProductType::Grocery,
            ProductKind::Clothing { .. } => ProductType::Clothing,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product held by an inventory.
///
/// ## Lifecycle
/// Constructed once with full initial state (no partial construction),
/// owned by exactly one [`crate::inventory::Inventory`], mutated in place
/// by sell/restock/reprice, destroyed only by explicit removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: String,
    name: String,
    price: Money,
    stock: i64,
    kind: ProductKind,
}

impl Product {
    /// Creates a product with full initial state.
    ///
    /// ## Errors
    /// - `price <= 0` → `ValidationError::MustBePositive`
    /// - `stock < 0` → `ValidationError::OutOfRange`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        stock: i64,
        kind: ProductKind,
    ) -> CoreResult<Self> {
        validate_price(price)?;
        validate_stock(stock)?;

        Ok(Product {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            kind,
        })
    }

    /// Creates an Electronics product.
    pub fn electronics(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        stock: i64,
        warranty_years: i64,
        brand: impl Into<String>,
    ) -> CoreResult<Self> {
        Product::new(
            id,
            name,
            price,
            stock,
            ProductKind::Electronics {
                warranty_years,
                brand: brand.into(),
            },
        )
    }

    /// Creates a Grocery product.
    pub fn grocery(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        stock: i64,
        expiry_date: NaiveDate,
    ) -> CoreResult<Self> {
        Product::new(id, name, price, stock, ProductKind::Grocery { expiry_date })
    }

    /// Creates a Clothing product.
    pub fn clothing(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        stock: i64,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> CoreResult<Self> {
        Product::new(
            id,
            name,
            price,
            stock,
            ProductKind::Clothing {
                size: size.into(),
                material: material.into(),
            },
        )
    }

    /// The unique product id (immutable after creation).
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// The current stock level.
    #[inline]
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// The variant-specific attributes.
    #[inline]
    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// The variant discriminant.
    #[inline]
    pub fn product_type(&self) -> ProductType {
        self.kind.product_type()
    }

    /// Adds items to stock.
    ///
    /// ## Errors
    /// - `amount <= 0` → `ValidationError::MustBePositive`
    pub fn restock(&mut self, amount: i64) -> CoreResult<()> {
        validate_quantity(amount, "restock amount")?;
        self.stock += amount;
        Ok(())
    }

    /// Sells items from stock.
    ///
    /// ## Errors
    /// - `quantity <= 0` → `ValidationError::MustBePositive`
    /// - `quantity > stock` → [`CoreError::OutOfStock`] stating available
    ///   vs. requested; stock is left unchanged
    pub fn sell(&mut self, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity, "sale quantity")?;

        if quantity > self.stock {
            return Err(CoreError::OutOfStock {
                product_id: self.id.clone(),
                available: self.stock,
                requested: quantity,
            });
        }

        self.stock -= quantity;
        Ok(())
    }

    /// Replaces the unit price.
    ///
    /// ## Errors
    /// - `new_price <= 0` → `ValidationError::MustBePositive`; the prior
    ///   price is retained
    pub fn set_price(&mut self, new_price: Money) -> CoreResult<()> {
        validate_price(new_price)?;
        self.price = new_price;
        Ok(())
    }

    /// Total stock value for this product: `price * stock`. Pure.
    #[inline]
    pub fn total_value(&self) -> Money {
        self.price.multiply_quantity(self.stock)
    }

    /// Whether a grocery product has passed its expiry date, probed
    /// against today's UTC calendar date.
    ///
    /// Always false for Electronics and Clothing.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }

    /// Expiry probe against an explicit date: true iff the probe date is
    /// strictly after the expiry date. The expiry day itself still counts
    /// as sellable.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        match &self.kind {
            ProductKind::Grocery { expiry_date } => today > *expiry_date,
            _ => false,
        }
    }
}

/// Variant-specific one-line summary, e.g. for listing screens.
///
/// A grocery past its expiry date carries an ` (EXPIRED)` marker after
/// the expiry field.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => write!(
                f,
                "Electronics - ID: {}, Name: {}, Brand: {}, Price: {}, Warranty: {} years, Stock: {}",
                self.id, self.name, brand, self.price, warranty_years, self.stock
            ),
            ProductKind::Grocery { expiry_date } => {
                let expired = if self.is_expired() { " (EXPIRED)" } else { "" };
                write!(
                    f,
                    "Grocery - ID: {}, Name: {}, Price: {}, Expiry: {}{}, Stock: {}",
                    self.id,
                    self.name,
                    self.price,
                    expiry_date.format(EXPIRY_DATE_FORMAT),
                    expired,
                    self.stock
                )
            }
            ProductKind::Clothing { size, material } => write!(
                f,
                "Clothing - ID: {}, Name: {}, Size: {}, Material: {}, Price: {}, Stock: {}",
                self.id, self.name, size, material, self.price, self.stock
            ),
        }
    }
}

// =============================================================================
// Product Record (persisted form)
// =============================================================================

/// The flat, tagged representation of a product used for persistence.
///
/// ## Wire Shape
/// ```json
/// { "type": "Electronics", "product_id": "E1", "name": "Laptop",
///   "price": 99999, "quantity_in_stock": 5,
///   "warranty_years": 2, "brand": "Lenovo" }
/// ```
///
/// The `type` tag dispatches to the variant; a missing or unrecognized
/// tag, a missing required field, or a wrongly typed field fails at
/// decode time. Decoding alone does not admit a record into an
/// inventory: [`Product::from_record`] re-runs the domain invariants, so
/// a record with a non-positive price, negative stock, or unparseable
/// expiry date is rejected even when it is syntactically valid JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProductRecord {
    Electronics {
        product_id: String,
        name: String,
        price: Money,
        quantity_in_stock: i64,
        warranty_years: i64,
        brand: String,
    },
    Grocery {
        product_id: String,
        name: String,
        price: Money,
        quantity_in_stock: i64,
        /// ISO calendar date, `YYYY-MM-DD`.
        expiry_date: String,
    },
    Clothing {
        product_id: String,
        name: String,
        price: Money,
        quantity_in_stock: i64,
        size: String,
        material: String,
    },
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        match &product.kind {
            ProductKind::Electronics {
                warranty_years,
                brand,
            } => ProductRecord::Electronics {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity_in_stock: product.stock,
                warranty_years: *warranty_years,
                brand: brand.clone(),
            },
            ProductKind::Grocery { expiry_date } => ProductRecord::Grocery {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity_in_stock: product.stock,
                expiry_date: expiry_date.format(EXPIRY_DATE_FORMAT).to_string(),
            },
            ProductKind::Clothing { size, material } => ProductRecord::Clothing {
                product_id: product.id.clone(),
                name: product.name.clone(),
                price: product.price,
                quantity_in_stock: product.stock,
                size: size.clone(),
                material: material.clone(),
            },
        }
    }
}

impl Product {
    /// Reconstructs a product from its persisted record.
    ///
    /// The exact inverse of [`ProductRecord::from`]: every domain
    /// invariant is re-validated, so corrupt records are rejected here
    /// rather than admitted into the inventory.
    pub fn from_record(record: ProductRecord) -> CoreResult<Product> {
        match record {
            ProductRecord::Electronics {
                product_id,
                name,
                price,
                quantity_in_stock,
                warranty_years,
                brand,
            } => Product::electronics(
                product_id,
                name,
                price,
                quantity_in_stock,
                warranty_years,
                brand,
            ),
            ProductRecord::Grocery {
                product_id,
                name,
                price,
                quantity_in_stock,
                expiry_date,
            } => {
                let expiry = parse_expiry_date(&expiry_date)?;
                Product::grocery(product_id, name, price, quantity_in_stock, expiry)
            }
            ProductRecord::Clothing {
                product_id,
                name,
                price,
                quantity_in_stock,
                size,
                material,
            } => Product::clothing(product_id, name, price, quantity_in_stock, size, material),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
