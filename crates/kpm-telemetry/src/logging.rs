//! Structured logging setup.
//!
//! Logs are emitted through `tracing` with consistent fields:
//! - `subsystem`: which core emitted the event (nb-subscription, dispatch, runtime)
//! - `meid`: the RAN element the event concerns, when there is one
//! - Additional context fields

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Handle returned once the global subscriber is installed.
#[derive(Debug)]
pub struct LoggingHandle {
    json: bool,
}

impl LoggingHandle {
    /// Whether log lines are rendered as JSON.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Install the global `tracing` subscriber.
///
/// Fails if a global subscriber is already set or the level filter does not parse.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingHandle, TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;

    if !config.console_output {
        tracing_subscriber::registry()
            .with(env_filter)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else if config.json_logs {
        // JSON output for containers/production
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else {
        // Pretty output for development
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        version = %config.app_version,
        json_logs = config.json_logs,
        "Logging initialized"
    );

    Ok(LoggingHandle {
        json: config.json_logs,
    })
}

/// Log an event with the `subsystem` field attached.
#[macro_export]
macro_rules! log_event {
    ($level:ident, $subsystem:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a peer-related event with standard fields.
#[macro_export]
macro_rules! log_peer_event {
    ($level:ident, $subsystem:expr, $msg:expr, $meid:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            meid = %$meid,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a RIC message event with the standard correlation fields.
#[macro_export]
macro_rules! log_message_event {
    ($level:ident, $subsystem:expr, $msg:expr, $name:expr, $meid:expr, $sub_id:expr, $xid:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            subsystem = $subsystem,
            message_type = %$name,
            meid = %$meid,
            sub_id = $sub_id,
            xid = %$xid,
            $($($field)*,)?
            $msg
        )
    };
}
