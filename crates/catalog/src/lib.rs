//! Product catalog, stock adjustment, and human-readable report rendering.

pub mod catalog;
pub mod report;

pub use catalog::{Catalog, DEFAULT_LOW_STOCK_THRESHOLD};
