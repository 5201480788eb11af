//! Centralized error types for the Stockroom workspace.

use crate::types::Operation;
use thiserror::Error;

/// Top-level error enum. Every variant except `Io` is recoverable: the menu
/// loop prints it and re-prompts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StockroomError {
    #[error("Invalid login credentials.")]
    InvalidCredentials,

    #[error("Access Denied: Admin only.")]
    AccessDenied { operation: Operation },

    #[error("Product not found.")]
    NotFound(String),

    #[error("Insufficient stock to reduce.")]
    InsufficientStock {
        id: String,
        available: u32,
        requested: i64,
    },

    #[error("Stock for {id} would exceed the maximum quantity.")]
    StockOverflow { id: String },

    #[error("Invalid choice, try again.")]
    InvalidChoice(String),

    #[error("Invalid {field}: '{input}' is not a valid number.")]
    Parse { field: &'static str, input: String },

    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StockroomError {
    /// `true` for errors that end the interactive session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

pub type StockroomResult<T> = Result<T, StockroomError>;
