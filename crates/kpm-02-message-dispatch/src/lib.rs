//! # Message Dispatch Core
//!
//! Entry point for every message the RIC message router delivers to the xApp.
//!
//! | Message type | Action |
//! |---|---|
//! | `RIC_HEALTH_CHECK_REQ` | logged |
//! | `RIC_INDICATION` | `RICIndicationRx` += 1 |
//! | `RIC_SUB_RESP` | correlation details logged |
//! | anything else | logged as unknown with its numeric tag |
//!
//! Whatever the outcome, the message's receive buffer goes back to the
//! framework exactly once through the `BufferReleaser` port.
//!
//! ## Architecture
//!
//! - **Domain Layer:** `RicMessage`, `BufferHandle`, the message type catalog
//! - **Ports Layer:** `MessageConsumer` (driving); `MessageHandler`,
//!   `BufferReleaser`, `MessageNameResolver` (driven)
//! - **Service Layer:** [`MessageDispatcher`], [`DefaultMessageHandler`], [`BufferGuard`]

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod domain;
pub mod ports;
pub mod service;

/// Recording doubles for the driven ports.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Domain types
pub use domain::{
    BufferHandle, BufferReleaseError, DispatchError, Dispatched, HandlerError, RicMessage,
    RicMessageCatalog, RicMessageType,
};

// Port traits
pub use ports::{BufferReleaser, MessageConsumer, MessageHandler, MessageNameResolver};

// Service
pub use service::{
    counter_opts, BufferGuard, DefaultMessageHandler, MessageDispatcher, COUNTER_GROUP,
    RIC_INDICATION_RX,
};
