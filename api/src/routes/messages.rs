//! Handler for POST /api/messages

use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use gp_core::domain::entities::message::ContactMessage;
use gp_core::repositories::{MessageRepository, TokenRepository};

use crate::dto::error::ErrorResponse;
use crate::dto::message::{MessageData, SubmitMessageRequest, SubmitMessageResponse};
use crate::routes::AppState;

/// Persists a contact message
///
/// # Request Body
///
/// ```json
/// {
///     "name": "Ada",
///     "email": "ada@example.com",
///     "message": "Hello"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "message": "Message sent successfully",
///     "data": { "id": "...", "name": "Ada", "email": "...", "message": "...", "createdAt": "..." }
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: empty name/message or malformed email
/// - 500 Internal Server Error: store failure
pub async fn submit_message<T, M>(
    state: web::Data<AppState<T, M>>,
    request: web::Json<SubmitMessageRequest>,
) -> HttpResponse
where
    T: TokenRepository + 'static,
    M: MessageRepository + 'static,
{
    if request.validate().is_err() {
        return ErrorResponse::new("Invalid request")
            .with_message("name, email and message are required")
            .to_response(StatusCode::BAD_REQUEST);
    }

    let message = ContactMessage::new(
        request.name.clone(),
        request.email.clone(),
        request.message.clone(),
    );

    match state.messages.create(message).await {
        Ok(saved) => HttpResponse::Created().json(SubmitMessageResponse {
            message: "Message sent successfully".to_string(),
            data: MessageData::from(saved),
        }),
        Err(error) => {
            log::error!("failed to save contact message: {}", error);
            ErrorResponse::new("Server error")
                .with_message(error.to_string())
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
