//! # Gatepass Core
//!
//! Core domain layer for the Gatepass backend. This crate contains the
//! access-token entity and lifecycle service, repository interfaces, the
//! background expiry sweeper, and the error types shared by the rest of
//! the workspace.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
