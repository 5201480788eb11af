//! Session state machine and role-gated dispatch.
//!
//! `Unauthenticated -> Authenticated(role) -> Terminated`. Only one login per
//! controller; after logout every operation is refused.

use stockroom_auth::{CredentialStore, StaticCredentials};
use stockroom_catalog::report::{self, LowStockReport};
use stockroom_catalog::{Catalog, DEFAULT_LOW_STOCK_THRESHOLD};
use stockroom_core::error::{StockroomError, StockroomResult};
use stockroom_core::{Operation, Product, ProductPatch, Role};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated { username: String, role: Role },
    Terminated,
}

/// A fully-read request, ready to run against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    View,
    Add(Product),
    Edit {
        id: String,
        patch: ProductPatch,
    },
    Delete {
        id: String,
    },
    Search {
        name: Option<String>,
        category: Option<String>,
    },
    AdjustStock {
        id: String,
        delta: i64,
    },
    LowStock,
    Logout,
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::View => Operation::View,
            Command::Add(_) => Operation::Add,
            Command::Edit { .. } => Operation::Edit,
            Command::Delete { .. } => Operation::Delete,
            Command::Search { .. } => Operation::Search,
            Command::AdjustStock { .. } => Operation::AdjustStock,
            Command::LowStock => Operation::LowStock,
            Command::Logout => Operation::Logout,
        }
    }
}

/// Result of a successful dispatch. Products are snapshots taken at dispatch
/// time.
#[derive(Debug)]
pub enum Outcome {
    Listing(Vec<Product>),
    Matches(Vec<Product>),
    Added(Product),
    Updated(Product),
    Deleted(Product),
    StockAdjusted(Product),
    LowStock(LowStockReport),
    LoggedOut,
}

impl Outcome {
    pub fn render(&self) -> String {
        match self {
            Outcome::Listing(products) => report::render_products(products, report::EMPTY_CATALOG),
            Outcome::Matches(products) => report::render_products(products, report::NO_MATCHES),
            Outcome::Added(p) => report::render_added(p),
            Outcome::Updated(p) => report::render_updated(p),
            Outcome::Deleted(p) => report::render_deleted(p),
            Outcome::StockAdjusted(p) => report::render_stock_adjusted(p),
            Outcome::LowStock(r) => r.render(),
            Outcome::LoggedOut => "Logging out...\n".to_string(),
        }
    }
}

/// Owns the catalog and the single session.
pub struct Controller<S = StaticCredentials> {
    store: S,
    catalog: Catalog,
    state: SessionState,
    low_stock_threshold: u32,
}

impl Default for Controller<StaticCredentials> {
    fn default() -> Self {
        Self::new(StaticCredentials, DEFAULT_LOW_STOCK_THRESHOLD)
    }
}

impl<S: CredentialStore> Controller<S> {
    pub fn new(store: S, low_stock_threshold: u32) -> Self {
        Self {
            store,
            catalog: Catalog::new(),
            state: SessionState::Unauthenticated,
            low_stock_threshold,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    pub fn role(&self) -> Option<Role> {
        match &self.state {
            SessionState::Authenticated { role, .. } => Some(*role),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    pub fn login(&mut self, username: &str, password: &str) -> StockroomResult<Role> {
        if self.state != SessionState::Unauthenticated {
            return Err(StockroomError::InvalidState(
                "a session has already been started".into(),
            ));
        }
        let role = self.store.authenticate(username, password)?;
        tracing::info!(username, %role, "logged in");
        self.state = SessionState::Authenticated {
            username: username.to_string(),
            role,
        };
        Ok(role)
    }

    /// Checks the current role against the capability table.
    pub fn authorize(&self, operation: Operation) -> StockroomResult<Role> {
        match self.role() {
            Some(role) if role.permits(operation) => Ok(role),
            Some(role) => {
                tracing::debug!(%role, ?operation, "access denied");
                Err(StockroomError::AccessDenied { operation })
            }
            None => {
                tracing::debug!(?operation, state = ?self.state, "no active session");
                Err(StockroomError::AccessDenied { operation })
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) -> StockroomResult<Outcome> {
        let operation = command.operation();
        self.authorize(operation)?;
        tracing::debug!(?operation, "dispatch");

        let outcome = match command {
            Command::View => Outcome::Listing(self.catalog.list_all().cloned().collect()),
            Command::Add(product) => Outcome::Added(self.catalog.add(product).clone()),
            Command::Edit { id, patch } => Outcome::Updated(self.catalog.edit(&id, patch)?.clone()),
            Command::Delete { id } => Outcome::Deleted(self.catalog.remove(&id)?),
            Command::Search { name, category } => Outcome::Matches(
                self.catalog
                    .search(name.as_deref(), category.as_deref())
                    .into_iter()
                    .cloned()
                    .collect(),
            ),
            Command::AdjustStock { id, delta } => {
                Outcome::StockAdjusted(self.catalog.adjust_stock(&id, delta)?.clone())
            }
            Command::LowStock => {
                Outcome::LowStock(LowStockReport::build(&self.catalog, self.low_stock_threshold))
            }
            Command::Logout => {
                self.logout()?;
                Outcome::LoggedOut
            }
        };
        Ok(outcome)
    }

    pub fn logout(&mut self) -> StockroomResult<()> {
        match std::mem::replace(&mut self.state, SessionState::Terminated) {
            SessionState::Authenticated { username, .. } => {
                tracing::info!(username = %username, "logged out");
                Ok(())
            }
            previous => {
                self.state = previous;
                Err(StockroomError::InvalidState("no active session to log out".into()))
            }
        }
    }
}
