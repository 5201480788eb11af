//! Domain models, shared types, and error definitions.
//!
//! Foundation crate -- no I/O dependencies.

pub mod error;
pub mod types;

pub use error::{StockroomError, StockroomResult};
pub use types::{Operation, Product, ProductPatch, Role};
