// shopping/src/models/order_item.rs

use serde::Serialize;
use sqlx::FromRow;
use storefront_core::ProductRef;
use uuid::Uuid;

/// One order line: the product as it was sold plus quantity.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
  pub id: Uuid,
  pub order_id: Uuid,
  pub product_id: Uuid,
  pub name: String,
  pub price_cents: i32,
  pub banner: Option<String>,
  pub quantity: i32,
}

impl OrderItem {
  pub fn product_ref(&self) -> ProductRef {
    ProductRef {
      id: self.product_id,
      name: self.name.clone(),
      price_cents: self.price_cents,
      banner: self.banner.clone(),
    }
  }
}
