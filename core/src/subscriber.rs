// storefront_core/src/subscriber.rs

//! The consuming side of the channel: a handler seam plus the loop that
//! feeds it.
//!
//! The loop inherits the channel's at-most-once semantics. There is no
//! acknowledgement to withhold, so a payload that fails to decode and a
//! handler that returns an error both end the same way: the delivery is
//! dropped and the loop moves on.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::channel::Subscription;
use crate::event::EventMessage;

/// Implemented by services that consume events from the channel.
#[async_trait]
pub trait EventHandler: Send + Sync + 'static {
  async fn handle_event(&self, message: EventMessage) -> anyhow::Result<()>;
}

/// Drive a subscription until its consumer stream ends.
///
/// - Malformed payloads, including unknown event names (the event enum is
///   closed), are dropped with a debug log.
/// - Handler errors are logged and the event is dropped; nothing is
///   retried or dead-lettered.
/// - When the stream ends (broker connection lost) the task logs and
///   exits; it is not restarted.
pub fn spawn_event_loop<H: EventHandler>(
  subscription: Subscription,
  handler: Arc<H>,
) -> JoinHandle<()> {
  tokio::spawn(async move {
    let mut consumer = subscription.consumer;
    while let Some(delivery) = consumer.next().await {
      let delivery = match delivery {
        Ok(delivery) => delivery,
        Err(e) => {
          error!(error = %e, "Event delivery failed; skipping.");
          continue;
        }
      };

      let message = match EventMessage::from_bytes(&delivery.data) {
        Ok(message) => message,
        Err(e) => {
          debug!(error = %e, "Dropping undecodable event payload.");
          continue;
        }
      };

      debug!(event = ?message.event, user_id = %message.data.user_id, "Dispatching event.");
      if let Err(e) = handler.handle_event(message).await {
        error!(error = %e, "Event handler failed; the event is dropped.");
      }
    }
    info!("Event consumer stream ended.");
  })
}
