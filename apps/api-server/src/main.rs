//! # Scribe API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use scribe_core::ports::{PasswordHasher, TokenService};
use scribe_infra::{JwtTokenService, Sha256PasswordHasher};

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    telemetry::init_telemetry(&TelemetryConfig::from_env());

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Scribe API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(config.database.as_ref()).await;

    // Auth services shared by the handlers and the Identity extractor
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::from_env());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Sha256PasswordHasher::new());

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(token_service.clone()))
            .app_data(web::Data::new(password_hasher.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
