//! Domain-error to HTTP mapping

use actix_web::{http::StatusCode, HttpResponse};

use gp_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Map a domain error to an opaque HTTP error response
///
/// Issuance and persistence failures are all dressed as the same 500; the
/// detail goes to the log, never to the caller.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("API error: {:?}", error);

    ErrorResponse::new("Server error").to_response(StatusCode::INTERNAL_SERVER_ERROR)
}
