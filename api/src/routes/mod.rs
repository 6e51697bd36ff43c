//! Route handlers for the public API
//!
//! Endpoints:
//! - token issuance and validation (the gate)
//! - contact-message submission (what the gate protects)

pub mod messages;
pub mod tokens;

use std::sync::Arc;

use gp_core::repositories::{MessageRepository, TokenRepository};
use gp_core::services::token::TokenService;

/// Application state holding the shared services
pub struct AppState<T, M>
where
    T: TokenRepository,
    M: MessageRepository,
{
    pub token_service: Arc<TokenService<T>>,
    pub messages: Arc<M>,
}
