// products/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub description: Option<String>,
  pub banner: Option<String>,
  /// Category, `"type"` on the wire.
  #[serde(rename = "type")]
  pub product_type: String,
  pub unit: i32,
  pub price_cents: i32,
  pub available: bool,
  pub supplier: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Body of an admin catalog insert; also the shape of the bundled seed
/// entries.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
  pub name: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub banner: Option<String>,
  #[serde(rename = "type")]
  pub product_type: String,
  #[serde(default = "default_unit")]
  pub unit: i32,
  pub price_cents: i32,
  #[serde(default = "default_available")]
  pub available: bool,
  #[serde(default)]
  pub supplier: Option<String>,
}

fn default_unit() -> i32 {
  1
}

fn default_available() -> bool {
  true
}
