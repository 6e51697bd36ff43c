//! Database module - MySQL implementations using SQLx
//!
//! Provides connection pool management and the repository pattern
//! implementations backing the `gp_core` traits.

pub mod connection;
pub mod mysql;

pub use connection::{DatabaseConfig, DatabasePool};
pub use mysql::{MySqlMessageRepository, MySqlTokenRepository};
