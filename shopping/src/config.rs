// shopping/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use storefront_core::EXCHANGE_NAME;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub app_secret: String,
  pub amqp_url: String,
  pub exchange: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name)
        .map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8003".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;
    let app_secret = get_env("APP_SECRET")?;
    let amqp_url = get_env("AMQP_URL")?;
    let exchange = get_env("EXCHANGE_NAME").unwrap_or_else(|_| EXCHANGE_NAME.to_string());

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      app_secret,
      amqp_url,
      exchange,
    })
  }
}
