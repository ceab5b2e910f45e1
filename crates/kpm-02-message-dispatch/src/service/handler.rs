//! The xApp's own message handler.

use kpm_telemetry::{log_message_event, CounterGroup, CounterOpts, CounterRegistry, TelemetryError};

use super::SUBSYSTEM;
use crate::domain::{HandlerError, RicMessage, RicMessageType};
use crate::ports::MessageHandler;

/// Counter group the handler registers.
pub const COUNTER_GROUP: &str = "kpm_app";

/// Indications received.
pub const RIC_INDICATION_RX: &str = "RICIndicationRx";

/// Counter specs registered by [`DefaultMessageHandler::register`].
pub fn counter_opts() -> Vec<CounterOpts> {
    vec![CounterOpts::new(
        RIC_INDICATION_RX,
        "Total number of RIC Indication message received",
    )]
}

/// Counts indications and logs subscription responses.
#[derive(Debug, Clone)]
pub struct DefaultMessageHandler {
    stats: CounterGroup,
}

impl DefaultMessageHandler {
    /// Register the handler's counter group in `registry`.
    ///
    /// # Errors
    ///
    /// `TelemetryError::MetricsInit` if the group is already registered there.
    pub fn register(registry: &CounterRegistry) -> Result<Self, TelemetryError> {
        let stats = registry.register_counter_group(&counter_opts(), COUNTER_GROUP)?;
        Ok(Self { stats })
    }

    /// Use an already registered group. It must contain [`RIC_INDICATION_RX`].
    pub fn with_stats(stats: CounterGroup) -> Self {
        Self { stats }
    }
}

impl MessageHandler for DefaultMessageHandler {
    fn handle_indication(&self, msg: &RicMessage) -> Result<(), HandlerError> {
        if !self.stats.inc(RIC_INDICATION_RX) {
            return Err(HandlerError::MissingCounter(RIC_INDICATION_RX.to_string()));
        }
        tracing::debug!(
            subsystem = SUBSYSTEM,
            meid = %msg.meid,
            len = msg.payload_len,
            "Indication counted"
        );
        Ok(())
    }

    fn handle_subscription_response(&self, msg: &RicMessage) -> Result<(), HandlerError> {
        log_message_event!(
            info,
            SUBSYSTEM,
            "Subscription response received",
            RicMessageType::SubResp,
            msg.meid,
            msg.sub_id,
            msg.xid
        );
        Ok(())
    }

    fn stats(&self) -> CounterGroup {
        self.stats.clone()
    }
}
