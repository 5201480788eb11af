//! Credential lookup for Stockroom.
//!
//! The credential table is plaintext and compiled in. It decides which role
//! a session gets; it is not a security mechanism.

pub mod credentials;

use stockroom_core::error::StockroomResult;
use stockroom_core::Role;

pub use credentials::{Credential, StaticCredentials};

/// Abstraction for resolving a username/password pair to a role.
pub trait CredentialStore {
    /// Returns the role for an exact username + password match, or
    /// `InvalidCredentials`.
    fn authenticate(&self, username: &str, password: &str) -> StockroomResult<Role>;
}
