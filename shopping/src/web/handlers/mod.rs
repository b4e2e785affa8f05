// shopping/src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod order_handlers;
pub mod wishlist_handlers;

use crate::state::AppState;
use storefront_core::{EventMessage, CUSTOMER_ROUTING_KEY};
use tracing::warn;

/// Publish an event to the customer service's routing key.
///
/// Publishing is best-effort: the state change that preceded it stays in
/// place whether or not the publish succeeds, and a failure only makes the
/// mirrored state diverge until a matching event is published again.
pub(crate) async fn publish_or_log(app_state: &AppState, message: EventMessage) {
  if let Err(e) = app_state.channel.publish(CUSTOMER_ROUTING_KEY, &message).await {
    warn!(error = %e, event = ?message.event, "Failed to publish event; mirrored state will diverge.");
  }
}
