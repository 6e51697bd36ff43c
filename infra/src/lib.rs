//! # Gatepass Infrastructure
//!
//! Concrete store implementations behind the `gp_core` repository traits:
//! MySQL via SQLx for production, and an in-memory store for tests and
//! database-less operation. Also owns connection-pool management.

pub mod database;
pub mod memory;

pub use database::{DatabaseConfig, DatabasePool, MySqlMessageRepository, MySqlTokenRepository};
pub use memory::{InMemoryMessageRepository, InMemoryTokenRepository};

use thiserror::Error;

/// Infrastructure-level errors raised outside the repository traits
/// (pool construction, configuration)
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
