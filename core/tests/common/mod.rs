// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use storefront_core::{EventMessage, OrderLineItem, OrderSnapshot, ProductRef};
use tracing::Level;
use uuid::Uuid;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixture builders ---

pub fn sample_product() -> ProductRef {
  ProductRef {
    id: Uuid::new_v4(),
    name: "alphonso mango".to_string(),
    price_cents: 450,
    banner: Some("http://localhost/images/mango.jpg".to_string()),
  }
}

pub fn sample_order(user_facing_total: i64) -> OrderSnapshot {
  let product = sample_product();
  OrderSnapshot {
    id: Uuid::new_v4(),
    status: "received".to_string(),
    total_amount_cents: user_facing_total,
    items: vec![OrderLineItem {
      product,
      quantity: 2,
    }],
    placed_at: chrono::Utc::now(),
  }
}

pub fn roundtrip(message: &EventMessage) -> EventMessage {
  let bytes = message.to_bytes().expect("encoding should succeed");
  EventMessage::from_bytes(&bytes).expect("decoding should succeed")
}
