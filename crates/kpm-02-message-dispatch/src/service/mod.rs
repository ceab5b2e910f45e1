//! # Message Dispatch Service
//!
//! Implements the `MessageConsumer` port. Every delivered message is logged
//! with its correlation fields, classified by symbolic name and routed:
//! health checks are logged, indications and subscription responses go to the
//! `MessageHandler`, anything else is logged as unknown. The message buffer is
//! released exactly once before `consume` returns or unwinds.

mod dispatcher;
mod guard;
mod handler;

pub use dispatcher::MessageDispatcher;
pub use guard::BufferGuard;
pub use handler::{counter_opts, DefaultMessageHandler, COUNTER_GROUP, RIC_INDICATION_RX};

pub(crate) const SUBSYSTEM: &str = "dispatch";
