// customer/src/models/address.rs

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Address {
  pub id: Uuid,
  pub customer_id: Uuid,
  pub street: String,
  pub postal_code: String,
  pub city: String,
  pub country: String,
}
