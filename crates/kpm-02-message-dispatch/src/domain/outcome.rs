//! Result of dispatching one message.

/// Which branch handled a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatched {
    /// Health check request; logged only.
    HealthCheck,
    /// Indication routed to the handler.
    Indication,
    /// Subscription response routed to the handler.
    SubscriptionResponse,
    /// Unrecognised message type; logged and dropped.
    Ignored { mtype: i32 },
}

impl Dispatched {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }
}
