//! Session controller and interactive menu for Stockroom.
//!
//! Flow: login -> (print menu -> read choice -> authorize -> dispatch -> print)* -> logout.

pub mod config;
pub mod menu;
pub mod session;

pub use config::Cli;
pub use menu::Console;
pub use session::{Command, Controller, Outcome, SessionState};
