// customer/src/models/mirror.rs

//! Mirrored copies of state owned elsewhere.
//!
//! These rows exist only for profile display and are written exclusively
//! by the event subscriber. They equal the authoritative state in the
//! shopping service only as long as every event arrives; a lost message
//! leaves them divergent until a matching event is published again.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use storefront_core::OrderLineItem;
use uuid::Uuid;

/// One wishlist entry, keyed by (customer, product).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WishlistItem {
  pub id: Uuid,
  pub customer_id: Uuid,
  pub product_id: Uuid,
  pub name: String,
  pub price_cents: i32,
  pub banner: Option<String>,
  pub added_at: DateTime<Utc>,
}

/// One mirrored cart line.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartMirrorItem {
  pub id: Uuid,
  pub customer_id: Uuid,
  pub product_id: Uuid,
  pub name: String,
  pub price_cents: i32,
  pub banner: Option<String>,
  pub quantity: i32,
  pub added_at: DateTime<Utc>,
}

/// A mirrored order; `id` is the shopping service's order id.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MirroredOrder {
  pub id: Uuid,
  pub customer_id: Uuid,
  /// Display string; no transition engine exists on either side.
  pub status: String,
  pub total_amount_cents: i64,
  pub items: Json<Vec<OrderLineItem>>,
  pub placed_at: DateTime<Utc>,
  pub recorded_at: DateTime<Utc>,
}
