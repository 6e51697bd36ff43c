//! Application factory
//!
//! Builds the Actix-web application with its middleware stack and route
//! table. The factory is generic over the repository implementations so
//! integration tests can run it against the in-memory stores.

use actix_web::{
    middleware::{Compress, Logger},
    web, App, HttpResponse,
};

use crate::middleware::{create_cors, RateLimiter, SecurityHeaders};
use crate::routes::{
    messages::submit_message,
    tokens::{generate_token, validate_token},
    AppState,
};

use gp_core::repositories::{MessageRepository, TokenRepository};

/// Create and configure the application with all dependencies
pub fn create_app<T, M>(
    app_state: web::Data<AppState<T, M>>,
    rate_limiter: RateLimiter,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    T: TokenRepository + 'static,
    M: MessageRepository + 'static,
{
    let cors = create_cors();
    let security = SecurityHeaders::new();

    App::new()
        .app_data(app_state)
        // Order matters: limiter runs first, then security headers, then
        // CORS; compression sits innermost so outer layers touch headers only
        .wrap(Compress::default())
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        .wrap(rate_limiter)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/generate-token", web::post().to(generate_token::<T, M>))
                .route("/validate-token", web::post().to(validate_token::<T, M>))
                .route("/messages", web::post().to(submit_message::<T, M>)),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "gatepass-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
