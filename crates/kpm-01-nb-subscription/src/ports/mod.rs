//! # Ports Layer - Hexagonal Architecture Boundaries
//!
//! - **Driving Ports (Inbound):** APIs this subsystem exposes to the runtime
//! - **Driven Ports (Outbound):** capabilities this subsystem requires from the framework

pub mod inbound;
pub mod outbound;

pub use inbound::NbSubscriptionApi;
pub use outbound::{AlarmClient, PeerDirectory, SubscriptionClient};
