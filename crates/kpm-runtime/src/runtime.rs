//! # xApp Runtime
//!
//! Owns the two cores and the process lifecycle:
//!
//! 1. `on_config_change(path)` when the configuration file is (re)read
//! 2. `on_ready()` runs one subscription pass over every discovered peer
//! 3. `run_delivery(rx)` feeds inbound messages to the dispatcher, one at a
//!    time, until shutdown
//! 4. `shutdown()` stops the delivery loop and the metrics reporter

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use kpm_01_nb_subscription::{
    NbSubscriptionApi, NbSubscriptionService, SubscriptionConfigError, SubscriptionReport,
};
use kpm_02_message_dispatch::{
    BufferReleaser, DefaultMessageHandler, DispatchError, Dispatched, MessageConsumer,
    MessageDispatcher, MessageHandler, RicMessage,
};
use kpm_telemetry::{log_event, CounterGroup, CounterRegistry, TelemetryError};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::adapters::{
    AlarmManagerClient, HeapBufferPool, StaticPeerDirectory, SubscriptionManagerClient,
};
use crate::config::{AppConfig, ConfigError};

const SUBSYSTEM: &str = "runtime";

/// Errors while assembling the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid subscription parameters: {0}")]
    Subscription(#[from] SubscriptionConfigError),

    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

/// What the delivery loop did before it stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryStats {
    pub consumed: u64,
    pub ignored: u64,
    pub handler_errors: u64,
}

/// The xApp process: orchestrator, dispatcher and their lifecycle.
pub struct XappRuntime {
    config: AppConfig,
    orchestrator: Arc<dyn NbSubscriptionApi>,
    dispatcher: Arc<dyn MessageConsumer>,
    stats: CounterGroup,
    registry: CounterRegistry,
    buffers: Arc<HeapBufferPool>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl XappRuntime {
    /// Wire the REST adapters, the static peer directory and the default
    /// message handler. Counters are registered in `registry`.
    pub fn build(config: AppConfig, registry: &CounterRegistry) -> Result<Self, RuntimeError> {
        let subscription_config = config.subscription_config()?;

        let orchestrator = NbSubscriptionService::new(
            subscription_config,
            Arc::new(StaticPeerDirectory::new(&config.peers)),
            Arc::new(SubscriptionManagerClient::new(&config.endpoints)?),
            Arc::new(AlarmManagerClient::new(&config.endpoints)?),
        )?;

        let handler = DefaultMessageHandler::register(registry)?;

        Ok(Self::assemble(
            config,
            Arc::new(orchestrator),
            Arc::new(handler),
            registry.clone(),
        ))
    }

    /// Assemble from an already built orchestrator and handler, releasing
    /// buffers into a fresh [`HeapBufferPool`].
    pub fn assemble(
        config: AppConfig,
        orchestrator: Arc<dyn NbSubscriptionApi>,
        handler: Arc<dyn MessageHandler>,
        registry: CounterRegistry,
    ) -> Self {
        let buffers = Arc::new(HeapBufferPool::new());
        let stats = handler.stats();
        let releaser: Arc<dyn BufferReleaser> = buffers.clone();
        let dispatcher = Arc::new(MessageDispatcher::new(handler, releaser));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            orchestrator,
            dispatcher,
            stats,
            registry,
            buffers,
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Pool the transport side allocates receive buffers from.
    pub fn buffer_pool(&self) -> Arc<HeapBufferPool> {
        Arc::clone(&self.buffers)
    }

    pub fn stats(&self) -> &CounterGroup {
        &self.stats
    }

    /// Bounded channel sized by `[delivery] channel_capacity`.
    pub fn delivery_channel(&self) -> (mpsc::Sender<RicMessage>, mpsc::Receiver<RicMessage>) {
        mpsc::channel(self.config.delivery.channel_capacity.max(1))
    }

    /// Configuration file notification. Logged only.
    pub fn on_config_change(&self, path: &Path) {
        log_event!(info, SUBSYSTEM, "Config file changed", path = %path.display());
    }

    /// Ready notification: run one subscription pass.
    pub async fn on_ready(&self) -> SubscriptionReport {
        log_event!(info, SUBSYSTEM, "xApp ready, subscribing to connected peers");
        let report = self.orchestrator.subscribe_to_all().await;

        if report.is_complete_success() {
            info!(
                subsystem = SUBSYSTEM,
                subscribed = report.success_count(),
                "All peers subscribed"
            );
        } else {
            warn!(
                subsystem = SUBSYSTEM,
                subscribed = report.success_count(),
                failed = report.failure_count(),
                enb_listing_failed = report.enb_error.is_some(),
                gnb_listing_failed = report.gnb_error.is_some(),
                "Subscription pass incomplete, continuing to consume messages"
            );
        }
        report
    }

    /// Consume messages from `rx` until shutdown or until every sender is gone.
    ///
    /// On shutdown, messages already queued are still consumed so their
    /// buffers are released.
    pub async fn run_delivery(&self, mut rx: mpsc::Receiver<RicMessage>) -> DeliveryStats {
        let mut stats = DeliveryStats::default();
        let mut shutdown = self.shutdown_rx.clone();

        let already_stopped = *shutdown.borrow();
        if already_stopped {
            rx.close();
        }

        loop {
            tokio::select! {
                maybe_msg = rx.recv() => {
                    match maybe_msg {
                        Some(msg) => self.deliver(msg, &mut stats),
                        None => {
                            info!(subsystem = SUBSYSTEM, "Delivery channel closed");
                            break;
                        }
                    }
                }
                changed = shutdown.changed() => {
                    let stop = changed.is_err() || *shutdown.borrow();
                    if stop {
                        info!(subsystem = SUBSYSTEM, "Shutdown signal received, draining delivery queue");
                        rx.close();
                        while let Some(msg) = rx.recv().await {
                            self.deliver(msg, &mut stats);
                        }
                        break;
                    }
                }
            }
        }

        info!(
            subsystem = SUBSYSTEM,
            consumed = stats.consumed,
            ignored = stats.ignored,
            handler_errors = stats.handler_errors,
            "Delivery loop stopped"
        );
        stats
    }

    fn deliver(&self, msg: RicMessage, stats: &mut DeliveryStats) {
        stats.consumed += 1;
        match self.dispatcher.consume(msg) {
            Ok(Dispatched::Ignored { .. }) => stats.ignored += 1,
            Ok(_) => {}
            // Already logged by the dispatcher; no redelivery.
            Err(DispatchError::Handler(_)) => stats.handler_errors += 1,
        }
    }

    /// Log a counter snapshot every `[metrics] report_interval_secs` until
    /// shutdown. Returns `None` when the interval is 0.
    pub fn spawn_metrics_reporter(&self) -> Option<JoinHandle<()>> {
        let secs = self.config.metrics.report_interval_secs;
        if secs == 0 {
            return None;
        }

        let stats = self.stats.clone();
        let mut shutdown = self.shutdown_rx.clone();
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(secs));
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        for (name, value) in stats.snapshot() {
                            info!(subsystem = SUBSYSTEM, group = stats.group(), counter = %name, value, "Counter");
                        }
                    }
                    _ = shutdown.changed() => break,
                }
            }
        }))
    }

    /// Prometheus text exposition of every registered counter.
    pub fn encode_metrics(&self) -> Result<String, TelemetryError> {
        self.registry.encode()
    }

    /// Signal the delivery loop and reporter to stop.
    pub fn shutdown(&self) {
        info!(subsystem = SUBSYSTEM, "Initiating graceful shutdown");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!(subsystem = SUBSYSTEM, error = %e, "Failed to send shutdown signal");
        }
    }
}
