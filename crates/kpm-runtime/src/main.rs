//! # KPM xApp
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging from the environment
//! 2. Load configuration (file named by `KPM_CONFIG`, then env overrides)
//! 3. Wire adapters and cores, register counters in the global registry
//! 4. Start the delivery loop and the metrics reporter
//! 5. Signal ready: one subscription pass over all connected peers
//! 6. Run until Ctrl+C; SIGHUP re-announces the config file

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use kpm_runtime::config::config_path;
use kpm_runtime::{AppConfig, XappRuntime};
use kpm_telemetry::{init_telemetry, CounterRegistry, TelemetryConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let _telemetry =
        init_telemetry(TelemetryConfig::from_env()).context("Failed to initialize telemetry")?;

    let path = config_path();
    let config = AppConfig::from_env()
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    let runtime = Arc::new(
        XappRuntime::build(config, CounterRegistry::global())
            .context("Failed to assemble xApp runtime")?,
    );
    runtime.on_config_change(&path);

    // The transport attaches buffers from `runtime.buffer_pool()` and feeds
    // `_delivery_tx`; it must outlive the delivery loop.
    let (_delivery_tx, delivery_rx) = runtime.delivery_channel();
    let delivery = {
        let runtime = Arc::clone(&runtime);
        tokio::spawn(async move { runtime.run_delivery(delivery_rx).await })
    };
    let reporter = runtime.spawn_metrics_reporter();

    runtime.on_ready().await;

    info!("xApp is running. Press Ctrl+C to stop.");
    wait_for_shutdown(&runtime, &path).await?;

    runtime.shutdown();
    match delivery.await {
        Ok(stats) => info!(consumed = stats.consumed, "Delivery loop joined"),
        Err(e) => error!(error = %e, "Delivery loop task failed"),
    }
    if let Some(reporter) = reporter {
        if let Err(e) = reporter.await {
            error!(error = %e, "Metrics reporter task failed");
        }
    }

    Ok(())
}

#[cfg(unix)]
async fn wait_for_shutdown(runtime: &XappRuntime, path: &Path) -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup()).context("Failed to install SIGHUP handler")?;
    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.context("Failed to listen for Ctrl+C")?;
                return Ok(());
            }
            _ = hangup.recv() => runtime.on_config_change(path),
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_shutdown(_runtime: &XappRuntime, _path: &Path) -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for Ctrl+C")
}
