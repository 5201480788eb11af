//! Human-readable rendering of catalog results.
//!
//! Every function returns complete lines (each ending in `\n`) so the menu
//! loop can write them straight to the terminal.

use crate::catalog::Catalog;
use stockroom_core::Product;

pub const EMPTY_CATALOG: &str = "No products available.";
pub const NO_MATCHES: &str = "No matching products found.";

/// Low-stock snapshot taken from a catalog.
#[derive(Debug)]
pub struct LowStockReport {
    pub threshold: u32,
    pub entries: Vec<LowStockEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LowStockEntry {
    pub id: String,
    pub name: String,
    pub stock_quantity: u32,
}

impl LowStockReport {
    pub fn build(catalog: &Catalog, threshold: u32) -> Self {
        let entries = catalog
            .low_stock(threshold)
            .into_iter()
            .map(|p| LowStockEntry {
                id: p.id.clone(),
                name: p.name.clone(),
                stock_quantity: p.stock_quantity,
            })
            .collect();
        Self { threshold, entries }
    }

    /// Ids in report order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    /// Header line followed by one line per product. The header is printed
    /// even when nothing is low.
    pub fn render(&self) -> String {
        let mut out = String::from("Low stock alert:\n");
        for e in &self.entries {
            out.push_str(&format!(
                "{} (ID: {}) has low stock: {}\n",
                e.name, e.id, e.stock_quantity
            ));
        }
        out
    }
}

/// One display line per product, or `empty` when there are none.
pub fn render_products<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    empty: &str,
) -> String {
    let mut out = String::new();
    for p in products {
        out.push_str(&format!("{p}\n"));
    }
    if out.is_empty() {
        out.push_str(empty);
        out.push('\n');
    }
    out
}

pub fn render_added(product: &Product) -> String {
    format!("Product {} added successfully.\n", product.name)
}

pub fn render_updated(product: &Product) -> String {
    format!("Product {} updated.\n", product.id)
}

pub fn render_deleted(product: &Product) -> String {
    format!("Product {} deleted.\n", product.id)
}

pub fn render_stock_adjusted(product: &Product) -> String {
    format!(
        "Stock for {} updated. New stock: {}\n",
        product.name, product.stock_quantity
    )
}
