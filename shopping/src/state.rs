// shopping/src/state.rs
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;
use storefront_core::MessageChannel;

#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  /// Injected at startup; handlers publish through it after state changes.
  pub channel: Arc<MessageChannel>,
  pub config: Arc<AppConfig>,
}
