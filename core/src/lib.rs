// src/lib.rs

//! Shared platform crate for the storefront services.
//!
//! The three services (customer, products, shopping) pull their common
//! infrastructure from here:
//!  - The domain event vocabulary and its JSON wire format (`event`).
//!  - The message-channel client connecting the services over AMQP
//!    (`channel`). Delivery is fire-and-forget: at-most-once, unordered.
//!  - The subscriber loop and handler seam for consuming events
//!    (`subscriber`).
//!  - Bearer-token claims, signing/verification, and the actix request
//!    guards every service mounts (`auth`).
//!
//! Nothing in this crate holds ambient state: the channel client is
//! constructed at service startup and passed in explicitly.

pub mod auth;
pub mod channel;
pub mod error;
pub mod event;
pub mod subscriber;

// --- Re-exports for the Public API ---

pub use crate::auth::{
  generate_signature, validate_signature, AdminUser, AuthError, AuthenticatedUser, Claims, Role,
  TokenSecret,
};
pub use crate::channel::{MessageChannel, Subscription, CUSTOMER_ROUTING_KEY, EXCHANGE_NAME};
pub use crate::error::{ChannelError, ChannelResult};
pub use crate::event::{
  EventKind, EventMessage, EventPayload, OrderLineItem, OrderSnapshot, ProductRef,
};
pub use crate::subscriber::{spawn_event_loop, EventHandler};
