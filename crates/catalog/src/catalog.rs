//! In-memory product catalog.
//!
//! Products live in a `HashMap` keyed by id, with a side vector recording
//! first-insertion order so listings are stable. The catalog does no
//! permission checks; callers gate access by role.

use std::collections::HashMap;
use stockroom_core::error::{StockroomError, StockroomResult};
use stockroom_core::{Product, ProductPatch};

/// Threshold used by the low-stock report when none is configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Default)]
pub struct Catalog {
    products: HashMap<String, Product>,
    /// Ids in first-insertion order. Overwriting an id keeps its slot.
    order: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Inserts `product`, silently replacing any record with the same id.
    pub fn add(&mut self, product: Product) -> &Product {
        let id = product.id.clone();
        match self.products.insert(id.clone(), product) {
            Some(previous) => {
                tracing::debug!(id = %id, previous = %previous.name, "product overwritten");
            }
            None => {
                tracing::debug!(id = %id, "product added");
                self.order.push(id.clone());
            }
        }
        &self.products[&id]
    }

    /// Applies `patch` to an existing product.
    pub fn edit(&mut self, id: &str, patch: ProductPatch) -> StockroomResult<&Product> {
        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| StockroomError::NotFound(id.to_string()))?;
        patch.apply_to(product);
        tracing::debug!(id, "product edited");
        Ok(&*product)
    }

    /// Deletes a product and returns it.
    pub fn remove(&mut self, id: &str) -> StockroomResult<Product> {
        let product = self
            .products
            .remove(id)
            .ok_or_else(|| StockroomError::NotFound(id.to_string()))?;
        self.order.retain(|existing| existing != id);
        tracing::debug!(id, "product removed");
        Ok(product)
    }

    /// All products in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &Product> + '_ {
        self.order.iter().filter_map(|id| self.products.get(id))
    }

    /// Case-insensitive substring search on name OR category.
    ///
    /// Empty filters count as absent. With no filter at all nothing matches.
    pub fn search(&self, name: Option<&str>, category: Option<&str>) -> Vec<&Product> {
        let name = normalize_filter(name);
        let category = normalize_filter(category);

        self.list_all()
            .filter(|p| {
                let by_name = name
                    .as_deref()
                    .is_some_and(|n| p.name.to_lowercase().contains(n));
                let by_category = category
                    .as_deref()
                    .is_some_and(|c| p.category.to_lowercase().contains(c));
                by_name || by_category
            })
            .collect()
    }

    /// Adds `delta` to a product's stock and returns the updated product.
    ///
    /// Rejected without any change when the result would be negative or
    /// exceed `u32::MAX`.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> StockroomResult<&Product> {
        let product = self
            .products
            .get_mut(id)
            .ok_or_else(|| StockroomError::NotFound(id.to_string()))?;

        let current = product.stock_quantity;
        let next = i64::from(current).saturating_add(delta);
        if next < 0 {
            tracing::debug!(id, current, delta, "adjustment would drive stock negative");
            return Err(StockroomError::InsufficientStock {
                id: id.to_string(),
                available: current,
                requested: delta,
            });
        }
        product.stock_quantity = u32::try_from(next).map_err(|_| {
            tracing::debug!(id, current, delta, "adjustment exceeds stock range");
            StockroomError::StockOverflow { id: id.to_string() }
        })?;

        tracing::info!(id, from = current, to = product.stock_quantity, "stock adjusted");
        Ok(&*product)
    }

    /// Products whose stock is at or below `threshold`, in insertion order.
    pub fn low_stock(&self, threshold: u32) -> Vec<&Product> {
        self.list_all()
            .filter(|p| p.stock_quantity <= threshold)
            .collect()
    }
}

fn normalize_filter(filter: Option<&str>) -> Option<String> {
    filter
        .filter(|f| !f.is_empty())
        .map(|f| f.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Catalog {
        let mut c = Catalog::new();
        c.add(Product::new("P1", "Widget", "Tools", 9.99, 3));
        c.add(Product::new("P2", "Gadget", "Electronics", 24.5, 12));
        c.add(Product::new("P3", "Hammer", "Tools", 15.0, 5));
        c
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn add_overwrites_and_keeps_position() {
        let mut c = seeded();
        c.add(Product::new("P1", "Widget v2", "Tools", 11.0, 7));
        assert_eq!(c.len(), 3);
        let listed: Vec<_> = c.list_all().map(|p| p.id.as_str()).collect();
        assert_eq!(listed, ["P1", "P2", "P3"]);
        assert_eq!(c.get("P1").unwrap().name, "Widget v2");
    }

    #[test]
    fn edit_missing_is_not_found() {
        let mut c = seeded();
        let err = c.edit("nope", ProductPatch::default()).unwrap_err();
        assert!(matches!(err, StockroomError::NotFound(id) if id == "nope"));
    }

    #[test]
    fn edit_only_touches_set_fields() {
        let mut c = seeded();
        let p = c
            .edit(
                "P2",
                ProductPatch {
                    category: Some("Gizmos".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(p.category, "Gizmos");
        assert_eq!(p.name, "Gadget");
        assert_eq!(p.stock_quantity, 12);
    }

    #[test]
    fn edit_stock_to_zero() {
        let mut c = seeded();
        c.edit(
            "P1",
            ProductPatch {
                stock_quantity: Some(0),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(c.get("P1").unwrap().stock_quantity, 0);
    }

    #[test]
    fn remove_drops_from_listing() {
        let mut c = seeded();
        let removed = c.remove("P2").unwrap();
        assert_eq!(removed.name, "Gadget");
        assert!(c.get("P2").is_none());
        let listed: Vec<_> = c.list_all().map(|p| p.id.as_str()).collect();
        assert_eq!(listed, ["P1", "P3"]);
        assert!(matches!(c.remove("P2"), Err(StockroomError::NotFound(_))));
    }

    #[test]
    fn readding_removed_id_goes_to_end() {
        let mut c = seeded();
        c.remove("P1").unwrap();
        c.add(Product::new("P1", "Widget", "Tools", 9.99, 3));
        let listed: Vec<_> = c.list_all().map(|p| p.id.as_str()).collect();
        assert_eq!(listed, ["P2", "P3", "P1"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let c = seeded();
        assert_eq!(ids(&c.search(Some("wid"), None)), ["P1"]);
        assert_eq!(ids(&c.search(Some("GET"), None)), ["P1", "P2"]);
        assert_eq!(ids(&c.search(None, Some("tool"))), ["P1", "P3"]);
    }

    #[test]
    fn search_name_or_category() {
        let c = seeded();
        assert_eq!(ids(&c.search(Some("hammer"), Some("electr"))), ["P2", "P3"]);
    }

    #[test]
    fn search_without_filters_matches_nothing() {
        let c = seeded();
        assert!(c.search(None, None).is_empty());
        assert!(c.search(Some(""), Some("")).is_empty());
    }

    #[test]
    fn adjust_rejects_negative_result() {
        let mut c = seeded();
        let err = c.adjust_stock("P1", -5).unwrap_err();
        assert!(matches!(
            err,
            StockroomError::InsufficientStock { available: 3, requested: -5, .. }
        ));
        assert_eq!(c.get("P1").unwrap().stock_quantity, 3);
    }

    #[test]
    fn adjust_to_exactly_zero() {
        let mut c = seeded();
        assert_eq!(c.adjust_stock("P1", -3).unwrap().stock_quantity, 0);
    }

    #[test]
    fn adjust_overflow_leaves_stock() {
        let mut c = seeded();
        let err = c.adjust_stock("P2", i64::MAX).unwrap_err();
        assert!(matches!(err, StockroomError::StockOverflow { .. }));
        assert_eq!(c.get("P2").unwrap().stock_quantity, 12);
    }

    #[test]
    fn adjust_missing_is_not_found() {
        let mut c = seeded();
        assert!(matches!(
            c.adjust_stock("P9", 1),
            Err(StockroomError::NotFound(_))
        ));
    }

    #[test]
    fn low_stock_is_inclusive() {
        let c = seeded();
        assert_eq!(ids(&c.low_stock(DEFAULT_LOW_STOCK_THRESHOLD)), ["P1", "P3"]);
        assert_eq!(ids(&c.low_stock(2)), Vec::<String>::new());
        assert_eq!(c.low_stock(100).len(), 3);
    }
}
