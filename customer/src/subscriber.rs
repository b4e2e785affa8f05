// customer/src/subscriber.rs

//! Applies channel events to the mirrored wishlist/cart/order state.
//!
//! A flat dispatch over the event kind, no state machine. The channel
//! delivers at most once, so the mirror equals the authoritative state
//! only while every event arrives; a lost message leaves divergence that
//! nothing reconciles.

use async_trait::async_trait;
use sqlx::PgPool;
use storefront_core::{EventHandler, EventKind, EventMessage, EventPayload};
use tracing::{instrument, warn};

use crate::services::customer_service;

pub struct CustomerEventHandler {
  pub db_pool: PgPool,
}

#[async_trait]
impl EventHandler for CustomerEventHandler {
  #[instrument(
    name = "customer::handle_event",
    skip(self, message),
    fields(event = ?message.event, user_id = %message.data.user_id)
  )]
  async fn handle_event(&self, message: EventMessage) -> anyhow::Result<()> {
    let EventPayload {
      user_id,
      product,
      order,
      qty,
    } = message.data;

    match message.event {
      // Both wishlist events map to the same toggle.
      EventKind::AddToWishlist | EventKind::RemoveFromWishlist => {
        let Some(product) = product else {
          warn!("Wishlist event without a product payload; dropping.");
          return Ok(());
        };
        customer_service::toggle_wishlist_item(&self.db_pool, user_id, &product).await?;
      }
      EventKind::AddToCart => {
        let (Some(product), Some(qty)) = (product, qty) else {
          warn!("ADD_TO_CART without product and qty; dropping.");
          return Ok(());
        };
        customer_service::manage_cart(&self.db_pool, user_id, &product, qty, false).await?;
      }
      EventKind::RemoveFromCart => {
        let Some(product) = product else {
          warn!("REMOVE_FROM_CART without a product payload; dropping.");
          return Ok(());
        };
        customer_service::manage_cart(&self.db_pool, user_id, &product, qty.unwrap_or(1), true)
          .await?;
      }
      EventKind::CreateOrder => {
        let Some(order) = order else {
          warn!("CREATE_ORDER without an order payload; dropping.");
          return Ok(());
        };
        customer_service::record_order(&self.db_pool, user_id, &order).await?;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use storefront_core::{OrderLineItem, OrderSnapshot, ProductRef};
  use uuid::Uuid;

  // A lazy pool never connects unless a query runs, so the
  // malformed-payload paths can be exercised without a database.
  fn handler_without_database() -> CustomerEventHandler {
    let pool = PgPool::connect_lazy("postgres://localhost/unused")
      .expect("lazy pool construction should not connect");
    CustomerEventHandler { db_pool: pool }
  }

  fn bare_message(event: EventKind) -> EventMessage {
    EventMessage {
      event,
      data: EventPayload {
        user_id: Uuid::new_v4(),
        product: None,
        order: None,
        qty: None,
      },
    }
  }

  #[tokio::test]
  async fn test_events_missing_their_payload_are_dropped_without_error() {
    let handler = handler_without_database();
    for event in [
      EventKind::AddToWishlist,
      EventKind::RemoveFromWishlist,
      EventKind::AddToCart,
      EventKind::RemoveFromCart,
      EventKind::CreateOrder,
    ] {
      handler
        .handle_event(bare_message(event))
        .await
        .expect("payload-less events are dropped, not failed");
    }
  }

  async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
      .expect("DATABASE_URL must be set to run the ignored database tests");
    PgPool::connect(&url).await.expect("database should be reachable")
  }

  fn sample_product() -> ProductRef {
    ProductRef {
      id: Uuid::new_v4(),
      name: "apples".to_string(),
      price_cents: 300,
      banner: None,
    }
  }

  #[tokio::test]
  #[ignore = "requires a running Postgres prepared with schema.sql"]
  async fn test_create_order_event_lands_in_the_mirror() {
    let pool = test_pool().await;
    let handler = CustomerEventHandler {
      db_pool: pool.clone(),
    };
    let user_id = Uuid::new_v4();
    let order = OrderSnapshot {
      id: Uuid::new_v4(),
      status: "received".to_string(),
      total_amount_cents: 600,
      items: vec![OrderLineItem {
        product: sample_product(),
        quantity: 2,
      }],
      placed_at: chrono::Utc::now(),
    };

    handler
      .handle_event(EventMessage::create_order(user_id, order.clone()))
      .await
      .expect("dispatch should apply the order");

    let details = customer_service::get_shopping_details(&pool, user_id)
      .await
      .expect("read mirror");
    assert!(
      details.orders.iter().any(|mirrored| mirrored.id == order.id),
      "the mirrored order list should contain the new order id"
    );
  }

  #[tokio::test]
  #[ignore = "requires a running Postgres prepared with schema.sql"]
  async fn test_cart_events_mirror_add_and_remove() {
    let pool = test_pool().await;
    let handler = CustomerEventHandler {
      db_pool: pool.clone(),
    };
    let user_id = Uuid::new_v4();
    let product = sample_product();

    handler
      .handle_event(EventMessage::add_to_cart(user_id, product.clone(), 2))
      .await
      .expect("apply add");
    let details = customer_service::get_shopping_details(&pool, user_id)
      .await
      .expect("read mirror");
    assert_eq!(details.cart.len(), 1);
    assert_eq!(details.cart[0].quantity, 2);

    handler
      .handle_event(EventMessage::remove_from_cart(user_id, product, 2))
      .await
      .expect("apply remove");
    let details = customer_service::get_shopping_details(&pool, user_id)
      .await
      .expect("read mirror");
    assert!(details.cart.is_empty());
  }
}
