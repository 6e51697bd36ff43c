//! Token service module
//!
//! This module holds the full token lifecycle:
//! - credential signing and issuance
//! - the validate-and-consume state machine with its grace-window policy
//! - background sweeping of expired records

mod config;
mod service;
mod sweeper;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::{TokenService, ValidationOutcome};
pub use sweeper::{SweeperConfig, SweeperHandle, TokenSweeper};
