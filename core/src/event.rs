// storefront_core/src/event.rs

//! The domain event vocabulary shared by the services.
//!
//! Events travel as JSON envelopes of the form
//! `{ "event": "<NAME>", "data": { "userId": ..., ... } }` with no schema
//! version field. The set of event names is a closed sum type: decoding a
//! payload whose name is not one of the known variants fails, and
//! subscribers drop such payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ChannelError, ChannelResult};

/// The closed set of domain events carried by the channel.
///
/// Wire names are the upper-snake strings the services exchange
/// (`ADD_TO_CART`, `CREATE_ORDER`, ...). Adding a variant here is a
/// compile-time-visible change for every subscriber match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
  AddToCart,
  RemoveFromCart,
  CreateOrder,
  AddToWishlist,
  RemoveFromWishlist,
}

/// Product snapshot carried by events and kept in mirrored state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
  pub id: Uuid,
  pub name: String,
  pub price_cents: i32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub banner: Option<String>,
}

/// One line of an order snapshot: the product as it was sold plus quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
  pub product: ProductRef,
  pub quantity: i32,
}

/// The order as published on `CREATE_ORDER`.
///
/// `status` is a display string; the order status has no transition engine
/// and mirrors render it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
  pub id: Uuid,
  pub status: String,
  pub total_amount_cents: i64,
  pub items: Vec<OrderLineItem>,
  pub placed_at: DateTime<Utc>,
}

/// Event payload. Which optional fields are present depends on the kind;
/// absent fields are omitted from the wire JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
  pub user_id: Uuid,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub product: Option<ProductRef>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub order: Option<OrderSnapshot>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub qty: Option<i32>,
}

/// The envelope published on the channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMessage {
  pub event: EventKind,
  pub data: EventPayload,
}

impl EventMessage {
  pub fn add_to_cart(user_id: Uuid, product: ProductRef, qty: i32) -> Self {
    Self {
      event: EventKind::AddToCart,
      data: EventPayload {
        user_id,
        product: Some(product),
        order: None,
        qty: Some(qty),
      },
    }
  }

  pub fn remove_from_cart(user_id: Uuid, product: ProductRef, qty: i32) -> Self {
    Self {
      event: EventKind::RemoveFromCart,
      data: EventPayload {
        user_id,
        product: Some(product),
        order: None,
        qty: Some(qty),
      },
    }
  }

  pub fn create_order(user_id: Uuid, order: OrderSnapshot) -> Self {
    Self {
      event: EventKind::CreateOrder,
      data: EventPayload {
        user_id,
        product: None,
        order: Some(order),
        qty: None,
      },
    }
  }

  pub fn add_to_wishlist(user_id: Uuid, product: ProductRef) -> Self {
    Self {
      event: EventKind::AddToWishlist,
      data: EventPayload {
        user_id,
        product: Some(product),
        order: None,
        qty: None,
      },
    }
  }

  pub fn remove_from_wishlist(user_id: Uuid, product: ProductRef) -> Self {
    Self {
      event: EventKind::RemoveFromWishlist,
      data: EventPayload {
        user_id,
        product: Some(product),
        order: None,
        qty: None,
      },
    }
  }

  /// Serialize to the JSON wire form.
  pub fn to_bytes(&self) -> ChannelResult<Vec<u8>> {
    serde_json::to_vec(self).map_err(|source| ChannelError::Encode { source })
  }

  /// Parse from the JSON wire form. Unknown event names fail here.
  pub fn from_bytes(bytes: &[u8]) -> ChannelResult<Self> {
    serde_json::from_slice(bytes).map_err(|source| ChannelError::Decode { source })
  }
}
