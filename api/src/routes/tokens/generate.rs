//! Handler for POST /api/generate-token

use actix_web::{web, HttpResponse};

use gp_core::repositories::{MessageRepository, TokenRepository};

use crate::dto::TokenResponse;
use crate::handlers::handle_domain_error;
use crate::routes::AppState;

/// Issues a fresh access token
///
/// Takes no input: the claim payload and the validity window are fixed.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJ...",
///     "createdAt": "2025-01-01T12:00:00Z",
///     "expiresAt": "2025-01-01T12:15:00Z",
///     "used": false
/// }
/// ```
///
/// ## Errors
/// - 500 Internal Server Error: signing or store failure; the body stays
///   opaque
pub async fn generate_token<T, M>(state: web::Data<AppState<T, M>>) -> HttpResponse
where
    T: TokenRepository + 'static,
    M: MessageRepository + 'static,
{
    match state.token_service.issue().await {
        Ok(record) => HttpResponse::Ok().json(TokenResponse::from(record)),
        Err(error) => handle_domain_error(error),
    }
}
