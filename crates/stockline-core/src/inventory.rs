//! # Inventory Store
//!
//! The keyed in-memory collection of products.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Inventory Operations                             │
//! │                                                                     │
//! │  Caller Action            Inventory Method        State Change      │
//! │  ─────────────            ────────────────        ────────────      │
//! │                                                                     │
//! │  Add product ───────────► add() ────────────────► products.push    │
//! │                                                                     │
//! │  Sell / Restock ────────► sell()/restock() ─────► product.stock    │
//! │                                                                     │
//! │  Search ────────────────► search_by_name()/      (read only)       │
//! │                           search_by_type()                          │
//! │                                                                     │
//! │  Expiry sweep ──────────► remove_expired_ ──────► products.retain  │
//! │                           groceries()                               │
//! │                                                                     │
//! │  Persist ───────────────► records()/ ───────────► (snapshot /      │
//! │                           from_records()          rebuild)          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Product ids are unique across the whole inventory (enforced here,
//!   not by the product entity)
//! - Store order is insertion order; every listing and search preserves it
//! - Lookups are linear scans; no secondary index is maintained
//!
//! ## Ownership
//! The inventory exclusively owns every product it holds. It is an
//! explicitly constructed, explicitly passed value - never process-wide
//! singleton state.

use chrono::{NaiveDate, Utc};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Product, ProductRecord, ProductType};

// =============================================================================
// Inventory
// =============================================================================

/// A keyed collection of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    /// Products in insertion order; ids are unique.
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory {
            products: Vec::new(),
        }
    }

    /// Position of a product id in store order.
    fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    /// Mutable product lookup, or `ProductNotFound`.
    fn get_mut(&mut self, id: &str) -> CoreResult<&mut Product> {
        let index = self
            .position(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        Ok(&mut self.products[index])
    }

    /// Adds a new product.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateProduct`] if the id is already a key; the
    ///   existing entry is left unmodified
    pub fn add(&mut self, product: Product) -> CoreResult<()> {
        if self.position(product.id()).is_some() {
            return Err(CoreError::DuplicateProduct {
                id: product.id().to_string(),
            });
        }
        self.products.push(product);
        Ok(())
    }

    /// Removes a product by id, returning it.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] if the id is absent
    pub fn remove(&mut self, id: &str) -> CoreResult<Product> {
        let index = self
            .position(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        Ok(self.products.remove(index))
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Case-insensitive substring search against product names, in store
    /// order. An empty query matches every product.
    pub fn search_by_name(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// All products of the requested variant, in store order.
    pub fn search_by_type(&self, product_type: ProductType) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.product_type() == product_type)
            .collect()
    }

    /// All products in store order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Sells `quantity` units of the identified product.
    ///
    /// Lookup failure is [`CoreError::ProductNotFound`]; the product's
    /// own failures (non-positive quantity, overdraw) propagate unchanged.
    pub fn sell(&mut self, id: &str, quantity: i64) -> CoreResult<()> {
        self.get_mut(id)?.sell(quantity)
    }

    /// Restocks `quantity` units of the identified product.
    pub fn restock(&mut self, id: &str, quantity: i64) -> CoreResult<()> {
        self.get_mut(id)?.restock(quantity)
    }

    /// Reprices the identified product.
    pub fn set_price(&mut self, id: &str, new_price: Money) -> CoreResult<()> {
        self.get_mut(id)?.set_price(new_price)
    }

    /// Total value of all stock: Σ `price * stock`. Zero when empty.
    pub fn total_value(&self) -> Money {
        self.products
            .iter()
            .fold(Money::zero(), |acc, p| acc + p.total_value())
    }

    /// Removes every expired grocery, probing against today's UTC date.
    ///
    /// Returns the removed ids in store order. Non-grocery products and
    /// groceries still within date are untouched. Running the sweep again
    /// without time passing removes nothing.
    pub fn remove_expired_groceries(&mut self) -> Vec<String> {
        self.remove_expired_groceries_on(Utc::now().date_naive())
    }

    /// Expiry sweep against an explicit probe date.
    pub fn remove_expired_groceries_on(&mut self, today: NaiveDate) -> Vec<String> {
        let expired_ids: Vec<String> = self
            .products
            .iter()
            .filter(|p| p.is_expired_on(today))
            .map(|p| p.id().to_string())
            .collect();

        self.products.retain(|p| !p.is_expired_on(today));
        expired_ids
    }

    /// Number of products held.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the inventory holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Snapshot of all products as persistable records, in store order.
    pub fn records(&self) -> Vec<ProductRecord> {
        self.products.iter().map(ProductRecord::from).collect()
    }

    /// Rebuilds an inventory from persisted records, all-or-nothing.
    ///
    /// Every record must reconstruct and every id must be unique; the
    /// first failure aborts the whole call and nothing is built. Callers
    /// replacing a live inventory can therefore keep the previous
    /// contents intact when a document turns out to be corrupt.
    pub fn from_records(records: Vec<ProductRecord>) -> CoreResult<Inventory> {
        let mut inventory = Inventory::new();
        for record in records {
            let product = Product::from_record(record)?;
            inventory.add(product)?;
        }
        Ok(inventory)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_inventory() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add(
                Product::electronics("E1", "Laptop", Money::from_cents(10000), 5, 2, "Lenovo")
                    .unwrap(),
            )
            .unwrap();
        inventory
            .add(Product::grocery("G1", "Milk", Money::from_cents(250), 10, date(2026, 8, 1)).unwrap())
            .unwrap();
        inventory
            .add(
                Product::clothing("C1", "T-Shirt", Money::from_cents(1550), 20, "M", "Cotton")
                    .unwrap(),
            )
            .unwrap();
        inventory
    }

    #[test]
    fn test_add_and_get() {
        let inventory = test_inventory();
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.get("G1").unwrap().name(), "Milk");
        assert!(inventory.get("X9").is_none());
    }

    #[test]
    fn test_add_duplicate_id_leaves_existing_entry() {
        let mut inventory = test_inventory();
        let imposter =
            Product::clothing("E1", "Socks", Money::from_cents(500), 99, "S", "Wool").unwrap();

        let err = inventory.add(imposter).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateProduct {
                id: "E1".to_string()
            }
        );

        // Existing entry unmodified
        let existing = inventory.get("E1").unwrap();
        assert_eq!(existing.name(), "Laptop");
        assert_eq!(existing.stock(), 5);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn test_remove() {
        let mut inventory = test_inventory();
        let removed = inventory.remove("G1").unwrap();
        assert_eq!(removed.id(), "G1");
        assert_eq!(inventory.len(), 2);
        assert!(inventory.get("G1").is_none());

        assert_eq!(
            inventory.remove("G1").unwrap_err(),
            CoreError::ProductNotFound("G1".to_string())
        );
    }

    #[test]
    fn test_search_by_name_is_case_insensitive_substring() {
        let inventory = test_inventory();

        let results = inventory.search_by_name("MILK");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "G1");

        let results = inventory.search_by_name("t");
        // "Laptop" and "T-Shirt" both contain a 't'
        let ids: Vec<&str> = results.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["E1", "C1"]);

        assert!(inventory.search_by_name("printer").is_empty());
    }

    #[test]
    fn test_search_by_name_empty_query_matches_all() {
        let inventory = test_inventory();
        assert_eq!(inventory.search_by_name("").len(), 3);
    }

    #[test]
    fn test_search_by_type() {
        let inventory = test_inventory();

        let groceries = inventory.search_by_type(ProductType::Grocery);
        assert_eq!(groceries.len(), 1);
        assert_eq!(groceries[0].id(), "G1");

        let mut inventory = inventory;
        inventory
            .add(
                Product::grocery("G2", "Bread", Money::from_cents(199), 4, date(2026, 9, 1))
                    .unwrap(),
            )
            .unwrap();
        let ids: Vec<&str> = inventory
            .search_by_type(ProductType::Grocery)
            .iter()
            .map(|p| p.id())
            .collect();
        assert_eq!(ids, vec!["G1", "G2"]); // store order
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let inventory = test_inventory();
        let ids: Vec<&str> = inventory.list_all().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["E1", "G1", "C1"]);
    }

    #[test]
    fn test_sell_and_restock_by_id() {
        let mut inventory = test_inventory();

        inventory.sell("E1", 3).unwrap();
        assert_eq!(inventory.get("E1").unwrap().stock(), 2);

        inventory.restock("E1", 10).unwrap();
        assert_eq!(inventory.get("E1").unwrap().stock(), 12);
    }

    #[test]
    fn test_sell_unknown_id_is_not_found() {
        let mut inventory = test_inventory();
        assert_eq!(
            inventory.sell("X9", 1).unwrap_err(),
            CoreError::ProductNotFound("X9".to_string())
        );
        assert_eq!(
            inventory.restock("X9", 1).unwrap_err(),
            CoreError::ProductNotFound("X9".to_string())
        );
    }

    #[test]
    fn test_sell_propagates_product_failures_unchanged() {
        let mut inventory = test_inventory();

        // Overdraw: OutOfStock with available vs requested
        let err = inventory.sell("E1", 50).unwrap_err();
        assert_eq!(
            err,
            CoreError::OutOfStock {
                product_id: "E1".to_string(),
                available: 5,
                requested: 50,
            }
        );
        assert_eq!(inventory.get("E1").unwrap().stock(), 5);

        // Non-positive quantity: validation error
        assert!(matches!(
            inventory.sell("E1", 0).unwrap_err(),
            CoreError::Validation(_)
        ));
    }

    #[test]
    fn test_set_price_by_id() {
        let mut inventory = test_inventory();
        inventory.set_price("C1", Money::from_cents(1299)).unwrap();
        assert_eq!(inventory.get("C1").unwrap().price(), Money::from_cents(1299));

        assert!(inventory.set_price("C1", Money::zero()).is_err());
        assert_eq!(inventory.get("C1").unwrap().price(), Money::from_cents(1299));
    }

    #[test]
    fn test_total_value() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.total_value(), Money::zero());

        inventory
            .add(
                Product::electronics("E1", "Laptop", Money::from_cents(10000), 5, 2, "Lenovo")
                    .unwrap(),
            )
            .unwrap();
        inventory
            .add(Product::grocery("G1", "Milk", Money::from_cents(250), 10, date(2026, 8, 1)).unwrap())
            .unwrap();

        // 5 × $100.00 + 10 × $2.50 = $525.00
        assert_eq!(inventory.total_value(), Money::from_cents(52500));
    }

    #[test]
    fn test_sell_scenario_updates_total_value() {
        let mut inventory = Inventory::new();
        inventory
            .add(
                Product::electronics("E1", "Laptop", Money::from_cents(10000), 5, 2, "Lenovo")
                    .unwrap(),
            )
            .unwrap();

        inventory.sell("E1", 3).unwrap();
        assert_eq!(inventory.get("E1").unwrap().stock(), 2);
        assert_eq!(inventory.total_value(), Money::from_cents(20000));

        assert!(matches!(
            inventory.sell("E1", 5).unwrap_err(),
            CoreError::OutOfStock { .. }
        ));
        assert_eq!(inventory.get("E1").unwrap().stock(), 2);
    }

    #[test]
    fn test_expiry_sweep() {
        let mut inventory = test_inventory();
        inventory
            .add(
                Product::grocery("G2", "Yogurt", Money::from_cents(300), 6, date(2026, 7, 1))
                    .unwrap(),
            )
            .unwrap();

        // Probe after G2's expiry but on G1's expiry day (still sellable)
        let removed = inventory.remove_expired_groceries_on(date(2026, 8, 1));
        assert_eq!(removed, vec!["G2".to_string()]);
        assert!(inventory.get("G2").is_none());
        assert!(inventory.get("G1").is_some());

        // Non-grocery products untouched
        assert!(inventory.get("E1").is_some());
        assert!(inventory.get("C1").is_some());
    }

    #[test]
    fn test_expiry_sweep_is_idempotent() {
        let mut inventory = test_inventory();
        let probe = date(2026, 9, 1); // after G1's expiry

        let first = inventory.remove_expired_groceries_on(probe);
        assert_eq!(first, vec!["G1".to_string()]);

        let second = inventory.remove_expired_groceries_on(probe);
        assert!(second.is_empty());
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_expiry_sweep_returns_ids_in_store_order() {
        let mut inventory = Inventory::new();
        for (id, day) in [("G1", 1), ("G2", 2), ("G3", 3)] {
            inventory
                .add(
                    Product::grocery(id, "Perishable", Money::from_cents(100), 1, date(2026, 7, day))
                        .unwrap(),
                )
                .unwrap();
        }

        let removed = inventory.remove_expired_groceries_on(date(2026, 8, 1));
        assert_eq!(
            removed,
            vec!["G1".to_string(), "G2".to_string(), "G3".to_string()]
        );
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_records_round_trip() {
        let inventory = test_inventory();
        let rebuilt = Inventory::from_records(inventory.records()).unwrap();
        assert_eq!(rebuilt, inventory);
    }

    #[test]
    fn test_from_records_rejects_duplicate_ids() {
        let inventory = test_inventory();
        let mut records = inventory.records();
        records.push(records[0].clone());

        let err = Inventory::from_records(records).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProduct { .. }));
    }

    #[test]
    fn test_from_records_is_all_or_nothing() {
        let mut records = test_inventory().records();
        records.push(ProductRecord::Grocery {
            product_id: "G9".to_string(),
            name: "Mystery".to_string(),
            price: Money::from_cents(100),
            quantity_in_stock: 1,
            expiry_date: "soon".to_string(), // unparseable
        });

        assert!(Inventory::from_records(records).is_err());
    }
}
