// products/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod models;
mod services;
mod state;
mod web;

use crate::config::AppConfig;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use sqlx::PgPool;
use std::sync::Arc;
use storefront_core::TokenSecret;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting products service...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize Database Pool
  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  // Seed the catalog if configured; a failed seed is logged and the
  // service starts anyway.
  if app_config.seed_db {
    if let Err(e) = services::product_service::seed_catalog(&db_pool).await {
      tracing::error!(error = %e, "Failed to seed the product catalog.");
    }
  }

  // Create AppState
  let app_state = AppState {
    db_pool: db_pool.clone(),
    config: app_config.clone(),
  };

  let token_secret = actix_data::Data::new(TokenSecret(app_config.app_secret.clone()));

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .app_data(token_secret.clone()) // Verification secret for the auth guards
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::routes::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
