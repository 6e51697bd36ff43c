use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;

use gp_api::app::create_app;
use gp_api::config::Config;
use gp_api::middleware::RateLimiter;
use gp_api::routes::AppState;
use gp_core::services::token::{SweeperConfig, TokenService, TokenServiceConfig, TokenSweeper};
use gp_infra::database::connection::{DatabaseConfig, DatabasePool};
use gp_infra::database::mysql::{MySqlMessageRepository, MySqlTokenRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Gatepass API Server");

    let config = Config::from_env().context("failed to load configuration")?;

    let bind_address = format!("{}:{}", config.host, config.port);
    info!("Server will bind to: {}", bind_address);

    // Database pool and repositories
    let database = DatabasePool::new(DatabaseConfig {
        url: config.database_url.clone(),
        ..DatabaseConfig::default()
    })
    .await
    .context("failed to connect to the database")?;
    database
        .health_check()
        .await
        .context("database health check failed")?;

    let token_repository = Arc::new(MySqlTokenRepository::new(database.pool().clone()));
    let message_repository = Arc::new(MySqlMessageRepository::new(database.pool().clone()));

    // Core services
    let token_service = Arc::new(TokenService::new(
        Arc::clone(&token_repository),
        TokenServiceConfig::with_secret(&config.jwt_secret),
    ));

    // Background expiry sweep runs for the lifetime of the server
    let sweeper = Arc::new(TokenSweeper::new(
        Arc::clone(&token_repository),
        SweeperConfig {
            interval_seconds: config.sweep_interval_seconds,
            enabled: true,
        },
    ));
    let sweeper_handle = sweeper.start();

    let app_state = web::Data::new(AppState {
        token_service,
        messages: message_repository,
    });

    // One limiter shared across workers so the budget is process-wide
    let rate_limiter = RateLimiter::new();

    let server = HttpServer::new(move || create_app(app_state.clone(), rate_limiter.clone()))
        .bind(&bind_address)?
        .run();

    let result = server.await;

    info!("Server stopped, shutting down background sweeper");
    sweeper_handle.shutdown();
    database.close().await;

    result.map_err(Into::into)
}
