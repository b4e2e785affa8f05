// shopping/src/models/cart_item.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use storefront_core::ProductRef;
use uuid::Uuid;

/// One authoritative cart line. The product fields are a snapshot taken
/// when the line was added; the catalog is not consulted again.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartItem {
  pub id: Uuid,
  pub customer_id: Uuid,
  pub product_id: Uuid,
  pub name: String,
  pub price_cents: i32,
  pub banner: Option<String>,
  pub quantity: i32,
  pub added_at: DateTime<Utc>,
}

impl CartItem {
  pub fn product_ref(&self) -> ProductRef {
    ProductRef {
      id: self.product_id,
      name: self.name.clone(),
      price_cents: self.price_cents,
      banner: self.banner.clone(),
    }
  }
}
