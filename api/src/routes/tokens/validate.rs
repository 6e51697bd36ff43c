//! Handler for POST /api/validate-token

use actix_web::{web, HttpResponse};

use gp_core::repositories::{MessageRepository, TokenRepository};
use gp_core::services::token::ValidationOutcome;

use crate::dto::{ValidateTokenRequest, ValidateTokenResponse};
use crate::routes::AppState;

/// Validates (and consumes) an access token
///
/// # Request Body
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Response
///
/// Always 200 with `{ "valid": bool }`. Rejections never explain
/// themselves: why a token is invalid is a minor information-disclosure
/// surface this endpoint deliberately does not expose. A store outage also
/// answers `{ "valid": false }` - the contract existing clients rely on -
/// rather than a 500; flipping that mapping is a local change here, the
/// service already reports the outage distinctly.
pub async fn validate_token<T, M>(
    state: web::Data<AppState<T, M>>,
    request: web::Json<ValidateTokenRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    M: MessageRepository + 'static,
{
    let outcome = state.token_service.validate(&request.token).await;

    if outcome == ValidationOutcome::StoreUnavailable {
        log::warn!("token store unavailable; answering valid=false");
    }

    HttpResponse::Ok().json(ValidateTokenResponse {
        valid: outcome == ValidationOutcome::Valid,
    })
}
