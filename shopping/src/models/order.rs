// shopping/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, Type as SqlxType};
use uuid::Uuid;

use crate::models::order_item::OrderItem;

// Matches order_status_enum in schema.sql. The status is set once at
// creation and displayed as-is; there is no transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, SqlxType)]
#[sqlx(type_name = "order_status_enum", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  Received,
  Shipped,
  Delivered,
  Cancelled,
}

impl OrderStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Received => "received",
      OrderStatus::Shipped => "shipped",
      OrderStatus::Delivered => "delivered",
      OrderStatus::Cancelled => "cancelled",
    }
  }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: Uuid,
  pub customer_id: Uuid,
  pub status: OrderStatus,
  pub total_amount_cents: i64,
  /// Stored verbatim; nothing verifies it against a payment gateway.
  pub txn_number: Option<String>,
  pub placed_at: DateTime<Utc>,
}

/// An order together with its line items, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetails {
  #[serde(flatten)]
  pub order: Order,
  pub items: Vec<OrderItem>,
}
