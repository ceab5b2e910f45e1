//! Driven ports: capabilities the dispatch core requires.

use kpm_telemetry::CounterGroup;

use crate::domain::{BufferHandle, BufferReleaseError, HandlerError, RicMessage, RicMessageCatalog};

/// Returns receive buffers to the framework.
pub trait BufferReleaser: Send + Sync {
    fn release(&self, buffer: BufferHandle) -> Result<(), BufferReleaseError>;
}

/// Framework-owned numeric-to-name map for message types.
pub trait MessageNameResolver: Send + Sync {
    /// Symbolic name of `mtype`, if the framework knows it.
    fn name_of(&self, mtype: i32) -> Option<&str>;
}

impl MessageNameResolver for RicMessageCatalog {
    fn name_of(&self, mtype: i32) -> Option<&str> {
        self.get(mtype)
    }
}

/// Per-type message handling.
pub trait MessageHandler: Send + Sync {
    /// Handle a `RIC_INDICATION`.
    fn handle_indication(&self, msg: &RicMessage) -> Result<(), HandlerError>;

    /// Handle a `RIC_SUB_RESP`.
    fn handle_subscription_response(&self, msg: &RicMessage) -> Result<(), HandlerError>;

    /// The handler's counters, by name.
    fn stats(&self) -> CounterGroup;
}
