// storefront_core/src/channel.rs

//! The shared publish/subscribe channel between the services.
//!
//! One durable direct exchange connects the services; each consuming
//! service binds its own exclusive queue under a routing key. Delivery is
//! **at-most-once with no ordering guarantee**: publishes are not
//! confirmed, consumers run without acknowledgements, and there is no
//! retry, dead-letter, or idempotency layer. A lost message leaves the
//! mirrored state divergent until a matching event happens to be published
//! again.
//!
//! The client is constructed at service startup and injected; there is no
//! ambient connection singleton.

use lapin::options::{
  BasicConsumeOptions, BasicPublishOptions, ExchangeDeclareOptions, QueueBindOptions,
  QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties, Consumer, ExchangeKind};
use tracing::{debug, info, instrument};

use crate::error::{ChannelError, ChannelResult};
use crate::event::EventMessage;

/// The direct exchange every service declares on connect.
pub const EXCHANGE_NAME: &str = "online_store";

/// Routing key the customer service consumes mirror events on.
pub const CUSTOMER_ROUTING_KEY: &str = "customer-service";

/// A connected messaging client bound to one exchange.
pub struct MessageChannel {
  channel: Channel,
  exchange: String,
}

impl MessageChannel {
  /// Connect to the broker, open a channel, and declare the exchange.
  #[instrument(name = "channel::connect", skip(amqp_url))]
  pub async fn connect(amqp_url: &str, exchange: &str) -> ChannelResult<Self> {
    let options = ConnectionProperties::default()
      .with_executor(tokio_executor_trait::Tokio::current())
      .with_reactor(tokio_reactor_trait::Tokio);

    let connection = Connection::connect(amqp_url, options)
      .await
      .map_err(|source| ChannelError::Connect {
        url: amqp_url.to_string(),
        source,
      })?;

    let channel = connection
      .create_channel()
      .await
      .map_err(|source| ChannelError::Connect {
        url: amqp_url.to_string(),
        source,
      })?;

    channel
      .exchange_declare(
        exchange,
        ExchangeKind::Direct,
        ExchangeDeclareOptions {
          durable: true,
          ..ExchangeDeclareOptions::default()
        },
        FieldTable::default(),
      )
      .await
      .map_err(|source| ChannelError::Connect {
        url: amqp_url.to_string(),
        source,
      })?;

    info!(%exchange, "Connected to the message broker.");
    Ok(Self {
      channel,
      exchange: exchange.to_string(),
    })
  }

  /// Publish an event under a routing key.
  ///
  /// Fire-and-forget: publisher confirms are not enabled, so a returned
  /// `Ok` means the frame was handed to the broker connection, not that
  /// any subscriber processed it (at-most-once).
  pub async fn publish(&self, routing_key: &str, message: &EventMessage) -> ChannelResult<()> {
    let payload = message.to_bytes()?;
    let _confirm = self
      .channel
      .basic_publish(
        &self.exchange,
        routing_key,
        BasicPublishOptions::default(),
        &payload,
        BasicProperties::default(),
      )
      .await
      .map_err(|source| ChannelError::Publish {
        exchange: self.exchange.clone(),
        routing_key: routing_key.to_string(),
        source,
      })?;
    debug!(event = ?message.event, %routing_key, "Published event.");
    Ok(())
  }

  /// Bind an exclusive auto-delete queue under `routing_key` and start a
  /// `no_ack` consumer on it.
  #[instrument(name = "channel::subscribe", skip(self))]
  pub async fn subscribe(
    &self,
    routing_key: &str,
    consumer_tag: &str,
  ) -> ChannelResult<Subscription> {
    let queue = self
      .channel
      .queue_declare(
        "",
        QueueDeclareOptions {
          exclusive: true,
          auto_delete: true,
          ..QueueDeclareOptions::default()
        },
        FieldTable::default(),
      )
      .await
      .map_err(|source| ChannelError::Subscribe {
        routing_key: routing_key.to_string(),
        source,
      })?;

    self
      .channel
      .queue_bind(
        queue.name().as_str(),
        &self.exchange,
        routing_key,
        QueueBindOptions::default(),
        FieldTable::default(),
      )
      .await
      .map_err(|source| ChannelError::Subscribe {
        routing_key: routing_key.to_string(),
        source,
      })?;

    let consumer = self
      .channel
      .basic_consume(
        queue.name().as_str(),
        consumer_tag,
        BasicConsumeOptions {
          // No acknowledgements: a delivery taken off the queue is gone
          // whether or not the handler succeeds.
          no_ack: true,
          ..BasicConsumeOptions::default()
        },
        FieldTable::default(),
      )
      .await
      .map_err(|source| ChannelError::Subscribe {
        routing_key: routing_key.to_string(),
        source,
      })?;

    info!(queue = %queue.name().as_str(), %routing_key, "Subscribed to the message channel.");
    Ok(Subscription { consumer })
  }
}

/// A live consumer handed to [`crate::subscriber::spawn_event_loop`].
pub struct Subscription {
  pub(crate) consumer: Consumer,
}
