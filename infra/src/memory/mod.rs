//! In-memory store implementations
//!
//! Process-local repositories backing the same traits as the MySQL
//! implementations. Used by the integration tests and for running the
//! service without a database.

pub mod message_store;
pub mod token_store;

pub use message_store::InMemoryMessageRepository;
pub use token_store::InMemoryTokenRepository;
