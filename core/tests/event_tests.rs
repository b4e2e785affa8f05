// tests/event_tests.rs
mod common;

use common::*;
use serde_json::{json, Value};
use storefront_core::{EventKind, EventMessage};
use uuid::Uuid;

#[test]
fn test_wire_names_match_the_channel_contract() {
  setup_tracing();
  let cases = [
    (EventKind::AddToCart, "ADD_TO_CART"),
    (EventKind::RemoveFromCart, "REMOVE_FROM_CART"),
    (EventKind::CreateOrder, "CREATE_ORDER"),
    (EventKind::AddToWishlist, "ADD_TO_WISHLIST"),
    (EventKind::RemoveFromWishlist, "REMOVE_FROM_WISHLIST"),
  ];
  for (kind, wire_name) in cases {
    let value = serde_json::to_value(kind).expect("event kind should serialize");
    assert_eq!(value, json!(wire_name), "wrong wire name for {:?}", kind);
  }
}

#[test]
fn test_envelope_roundtrip_is_identity() {
  setup_tracing();
  let user_id = Uuid::new_v4();

  let messages = vec![
    EventMessage::add_to_cart(user_id, sample_product(), 3),
    EventMessage::remove_from_cart(user_id, sample_product(), 1),
    EventMessage::create_order(user_id, sample_order(900)),
    EventMessage::add_to_wishlist(user_id, sample_product()),
    EventMessage::remove_from_wishlist(user_id, sample_product()),
  ];

  for message in messages {
    assert_eq!(roundtrip(&message), message);
  }
}

#[test]
fn test_absent_payload_fields_are_omitted_from_the_wire() {
  let message = EventMessage::add_to_wishlist(Uuid::new_v4(), sample_product());
  let bytes = message.to_bytes().expect("encoding should succeed");
  let value: Value = serde_json::from_slice(&bytes).expect("wire form should be JSON");

  let data = value
    .get("data")
    .and_then(Value::as_object)
    .expect("envelope should carry a data object");
  assert!(data.contains_key("userId"));
  assert!(data.contains_key("product"));
  assert!(!data.contains_key("order"), "wishlist events carry no order");
  assert!(!data.contains_key("qty"), "wishlist events carry no qty");
}

#[test]
fn test_cart_events_carry_product_and_qty() {
  let message = EventMessage::add_to_cart(Uuid::new_v4(), sample_product(), 2);
  let bytes = message.to_bytes().expect("encoding should succeed");
  let value: Value = serde_json::from_slice(&bytes).expect("wire form should be JSON");

  assert_eq!(value["event"], json!("ADD_TO_CART"));
  assert_eq!(value["data"]["qty"], json!(2));
  assert_eq!(
    value["data"]["product"]["priceCents"],
    json!(450),
    "product snapshots use camelCase field names"
  );
}

#[test]
fn test_unknown_event_names_fail_decode() {
  let payload = json!({
    "event": "CLEAR_CART",
    "data": { "userId": Uuid::new_v4() }
  });
  let bytes = serde_json::to_vec(&payload).expect("fixture should serialize");

  assert!(
    EventMessage::from_bytes(&bytes).is_err(),
    "the event enum is closed; unknown names must not decode"
  );
}

#[test]
fn test_garbage_bytes_fail_decode() {
  assert!(EventMessage::from_bytes(b"not json at all").is_err());
}
