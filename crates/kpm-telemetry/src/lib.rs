//! # KPM Telemetry
//!
//! Logging and counters for the KPM xApp.
//!
//! ## Components
//!
//! - **Logging**: `tracing-subscriber` with an env filter and either pretty or JSON output
//! - **Counters**: named Prometheus counter groups, registered once at startup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kpm_telemetry::{init_telemetry, CounterOpts, CounterRegistry, TelemetryConfig};
//!
//! let _guard = init_telemetry(TelemetryConfig::from_env())?;
//!
//! let stats = CounterRegistry::global().register_counter_group(
//!     &[CounterOpts::new("RICIndicationRx", "Total number of RIC Indication message received")],
//!     "kpm_app",
//! )?;
//! stats.inc("RICIndicationRx");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `KPM_SERVICE_NAME` | `kpm-xapp` | Service name in logs |
//! | `KPM_LOG_LEVEL` | `info` | Log level filter |
//! | `KPM_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |
//! | `KPM_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingHandle};
pub use metrics::{Counter, CounterGroup, CounterOpts, CounterRegistry};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Initialize logging for the process.
///
/// Returns a guard that should be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let logging = init_logging(&config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name,
        _logging: logging,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
    _logging: LoggingHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry...");
    }
}
