//! Static credential registry.
//!
//! Seeded with exactly two entries at first use and never mutated.

use crate::CredentialStore;
use std::collections::HashMap;
use std::sync::LazyLock;
use stockroom_core::error::{StockroomError, StockroomResult};
use stockroom_core::Role;

/// One row of the credential table.
#[derive(Debug, Clone)]
pub struct Credential {
    pub password: &'static str,
    pub role: Role,
}

impl Credential {
    const fn new(password: &'static str, role: Role) -> Self {
        Self { password, role }
    }
}

/// Returns the credential entry for a username, if any.
pub fn lookup(username: &str) -> Option<&'static Credential> {
    CREDENTIALS.get(username)
}

static CREDENTIALS: LazyLock<HashMap<&'static str, Credential>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("admin", Credential::new("admin123", Role::Admin));
    m.insert("user", Credential::new("user123", Role::User));
    m
});

/// [`CredentialStore`] backed by the compiled-in table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCredentials;

impl CredentialStore for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> StockroomResult<Role> {
        match lookup(username) {
            Some(entry) if entry.password == password => {
                tracing::debug!(username, role = %entry.role, "credentials accepted");
                Ok(entry.role)
            }
            Some(_) => {
                tracing::debug!(username, "password mismatch");
                Err(StockroomError::InvalidCredentials)
            }
            None => {
                tracing::debug!(username, "unknown username");
                Err(StockroomError::InvalidCredentials)
            }
        }
    }
}
