//! Driving port: the single entry point for inbound delivery.

use crate::domain::{DispatchError, Dispatched, RicMessage};

/// Consumes one delivered message.
///
/// Implementations own `msg.buffer` for the duration of the call and release
/// it exactly once before returning, on every path including panics.
pub trait MessageConsumer: Send + Sync {
    /// Classify `msg`, route it and release its buffer.
    ///
    /// Unknown message types are `Ok(Dispatched::Ignored { .. })`.
    ///
    /// # Errors
    ///
    /// `DispatchError::Handler` if the routed handler failed. The buffer has
    /// still been released.
    fn consume(&self, msg: RicMessage) -> Result<Dispatched, DispatchError>;
}
