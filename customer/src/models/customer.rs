// customer/src/models/customer.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
  pub id: Uuid,
  pub email: String,
  // The argon2 PHC string embeds its salt; there is no separate salt
  // column.
  #[serde(skip_serializing)] // Never send password hash to client
  pub password_hash: String,
  pub phone: Option<String>,
  pub role: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
