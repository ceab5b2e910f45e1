use std::sync::Arc;

use kpm_telemetry::log_message_event;
use tracing::{error, info};

use super::guard::BufferGuard;
use super::SUBSYSTEM;
use crate::domain::{DispatchError, Dispatched, RicMessage, RicMessageType};
use crate::ports::{BufferReleaser, MessageConsumer, MessageHandler, MessageNameResolver};

/// Name logged for message types the resolver does not know.
const UNKNOWN_NAME: &str = "UNKNOWN";

/// Classifies each delivered message and routes it to the handler.
///
/// # Example
///
/// ```rust,ignore
/// use kpm_02_message_dispatch::{MessageConsumer, MessageDispatcher, RicMessage};
///
/// let dispatcher = MessageDispatcher::new(handler, releaser);
/// let outcome = dispatcher.consume(msg)?;
/// ```
pub struct MessageDispatcher {
    handler: Arc<dyn MessageHandler>,
    releaser: Arc<dyn BufferReleaser>,
    resolver: Arc<dyn MessageNameResolver>,
}

impl MessageDispatcher {
    /// Dispatcher resolving names with the standard RIC catalog.
    pub fn new(handler: Arc<dyn MessageHandler>, releaser: Arc<dyn BufferReleaser>) -> Self {
        Self::with_resolver(
            handler,
            releaser,
            Arc::new(crate::domain::RicMessageCatalog::standard()),
        )
    }

    pub fn with_resolver(
        handler: Arc<dyn MessageHandler>,
        releaser: Arc<dyn BufferReleaser>,
        resolver: Arc<dyn MessageNameResolver>,
    ) -> Self {
        Self {
            handler,
            releaser,
            resolver,
        }
    }

    pub fn handler(&self) -> &Arc<dyn MessageHandler> {
        &self.handler
    }

    fn route(&self, kind: Option<RicMessageType>, msg: &RicMessage) -> Result<Dispatched, DispatchError> {
        match kind {
            Some(RicMessageType::HealthCheckReq) => {
                info!(subsystem = SUBSYSTEM, meid = %msg.meid, "Received health check request");
                Ok(Dispatched::HealthCheck)
            }
            Some(RicMessageType::Indication) => {
                self.handler.handle_indication(msg)?;
                Ok(Dispatched::Indication)
            }
            Some(RicMessageType::SubResp) => {
                self.handler.handle_subscription_response(msg)?;
                Ok(Dispatched::SubscriptionResponse)
            }
            _ => {
                info!(
                    subsystem = SUBSYSTEM,
                    mtype = msg.mtype,
                    "Unknown message type '{}' received",
                    msg.mtype
                );
                Ok(Dispatched::Ignored { mtype: msg.mtype })
            }
        }
    }
}

impl MessageConsumer for MessageDispatcher {
    fn consume(&self, mut msg: RicMessage) -> Result<Dispatched, DispatchError> {
        // Declared first so it drops last, after routing has finished with `msg`.
        let _buffer = BufferGuard::new(msg.buffer.take(), self.releaser.as_ref());

        let name = self.resolver.name_of(msg.mtype);
        log_message_event!(
            info,
            SUBSYSTEM,
            "Message received",
            name.unwrap_or(UNKNOWN_NAME),
            msg.meid,
            msg.sub_id,
            msg.xid,
            len = msg.payload_len
        );

        let kind = name.and_then(RicMessageType::from_name);
        let result = self.route(kind, &msg);
        if let Err(e) = &result {
            error!(
                subsystem = SUBSYSTEM,
                meid = %msg.meid,
                mtype = msg.mtype,
                error = %e,
                "Message handler failed"
            );
        }
        result
    }
}
