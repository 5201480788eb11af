//! Domain types for the Stockroom inventory tracker.

use crate::error::{StockroomError, StockroomResult};
use std::fmt;

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

/// One catalog record, keyed by `id`.
///
/// `stock_quantity` is unsigned, so a product can never hold negative stock.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock_quantity: u32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock_quantity,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Category: {}, Price: {}, Stock: {}",
            self.id,
            self.name,
            self.category,
            format_price(self.price),
            self.stock_quantity
        )
    }
}

/// Shortest round-trip form with a decimal point on whole numbers (`10.0`)
/// and a signed, two-digit exponent outside `[1e-4, 1e16)` (`1e+16`, `1e-05`).
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "nan".to_string();
    }
    // `{:?}` already switches to exponent form at the same magnitudes.
    let shortest = format!("{price:?}");
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => shortest,
    }
}

/// Partial update for an existing product.
///
/// `None` leaves a field untouched. `Some(0)` and `Some(0.0)` are real values
/// and are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<u32>,
}

impl ProductPatch {
    /// Overwrites every field that is set.
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock_quantity {
            product.stock_quantity = stock;
        }
    }
}

// ---------------------------------------------------------------------------
// Roles and operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Capability table. Exhaustive on both sides so a new role or operation
    /// cannot be added without deciding its permission here.
    pub const fn permits(self, operation: Operation) -> bool {
        match (self, operation) {
            (Role::Admin, _) => true,
            (Role::User, Operation::View | Operation::Search | Operation::Logout) => true,
            (
                Role::User,
                Operation::Add
                | Operation::Edit
                | Operation::Delete
                | Operation::AdjustStock
                | Operation::LowStock,
            ) => false,
        }
    }

    /// Menu entries this role may choose, in menu order.
    pub fn menu(self) -> impl Iterator<Item = Operation> {
        Operation::ALL
            .into_iter()
            .filter(move |op| self.permits(*op))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "Admin",
            Role::User => "User",
        })
    }
}

/// A menu operation. The numeric codes are shared by every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    View = 1,
    Add = 2,
    Edit = 3,
    Delete = 4,
    Search = 5,
    AdjustStock = 6,
    LowStock = 7,
    Logout = 8,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::View,
        Operation::Add,
        Operation::Edit,
        Operation::Delete,
        Operation::Search,
        Operation::AdjustStock,
        Operation::LowStock,
        Operation::Logout,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Operation::View => "View Products",
            Operation::Add => "Add Product",
            Operation::Edit => "Edit Product",
            Operation::Delete => "Delete Product",
            Operation::Search => "Search Products",
            Operation::AdjustStock => "Adjust Stock",
            Operation::LowStock => "Check Low Stock",
            Operation::Logout => "Logout",
        }
    }

    /// Parses a raw menu choice such as `"5"` or `" 5\n"`.
    pub fn from_choice(input: &str) -> StockroomResult<Self> {
        let trimmed = input.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|code| Self::ALL.into_iter().find(|op| op.code() == code))
            .ok_or_else(|| StockroomError::InvalidChoice(trimmed.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.code(), self.label())
    }
}
