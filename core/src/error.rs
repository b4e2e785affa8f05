// storefront_core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChannelError {
  #[error("Failed to connect to the message broker at '{url}'. Source: {source}")]
  Connect {
    url: String,
    #[source]
    source: lapin::Error,
  },

  #[error("Failed to publish on exchange '{exchange}' with routing key '{routing_key}'. Source: {source}")]
  Publish {
    exchange: String,
    routing_key: String,
    #[source]
    source: lapin::Error,
  },

  #[error("Failed to subscribe with routing key '{routing_key}'. Source: {source}")]
  Subscribe {
    routing_key: String,
    #[source]
    source: lapin::Error,
  },

  #[error("Failed to encode event message: {source}")]
  Encode {
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to decode event message: {source}")]
  Decode {
    #[source]
    source: serde_json::Error,
  },
}

pub type ChannelResult<T, E = ChannelError> = std::result::Result<T, E>;
