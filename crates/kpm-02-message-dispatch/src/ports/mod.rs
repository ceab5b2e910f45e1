//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Port (Inbound):** `MessageConsumer`, called once per delivered message
//! - **Driven Ports (Outbound):** buffer release, type-name resolution, per-type handling

pub mod inbound;
pub mod outbound;

pub use inbound::MessageConsumer;
pub use outbound::{BufferReleaser, MessageHandler, MessageNameResolver};
