//! Prometheus counters for the xApp.
//!
//! Counters are registered in named groups. The group name becomes the metric
//! namespace, so `RICIndicationRx` in group `kpm_app` is exported as
//! `kpm_app_RICIndicationRx`.
//!
//! Counters are monotonic and only ever incremented; `IntCounter::inc` is an
//! atomic add, so a group can be shared freely between consumer instances.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, Opts, Registry, TextEncoder};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::TelemetryError;

/// A named, monotonically increasing integer counter.
pub type Counter = IntCounter;

lazy_static! {
    /// Process-wide registry
    static ref GLOBAL_REGISTRY: CounterRegistry = CounterRegistry::new();
}

/// Name and help text of one counter in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterOpts {
    pub name: String,
    pub help: String,
}

impl CounterOpts {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
        }
    }
}

/// Counters registered together under one group name.
///
/// Cloning is cheap; all clones share the same underlying counters.
#[derive(Clone)]
pub struct CounterGroup {
    group: String,
    counters: Arc<BTreeMap<String, Counter>>,
}

impl CounterGroup {
    /// Group name (metric namespace).
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Look up a counter by its name within the group.
    pub fn get(&self, name: &str) -> Option<&Counter> {
        self.counters.get(name)
    }

    /// Increment the named counter by one.
    ///
    /// Returns `false` if the group has no counter with that name.
    pub fn inc(&self, name: &str) -> bool {
        match self.counters.get(name) {
            Some(counter) => {
                counter.inc();
                true
            }
            None => false,
        }
    }

    /// Current value of the named counter.
    pub fn value(&self, name: &str) -> Option<u64> {
        self.counters.get(name).map(IntCounter::get)
    }

    /// Current value of every counter in the group, keyed by name.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counters
            .iter()
            .map(|(name, counter)| (name.clone(), counter.get()))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.counters.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl fmt::Debug for CounterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterGroup")
            .field("group", &self.group)
            .field("counters", &self.snapshot())
            .finish()
    }
}

/// Registry that owns every counter group.
#[derive(Clone, Default)]
pub struct CounterRegistry {
    registry: Registry,
}

impl CounterRegistry {
    /// Create an isolated registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static CounterRegistry {
        &GLOBAL_REGISTRY
    }

    /// Create and register one counter per entry of `counters_opts` under `group`.
    ///
    /// Called once at startup; the returned group is kept for the process
    /// lifetime. Registering a name that already exists in the group fails.
    pub fn register_counter_group(
        &self,
        counters_opts: &[CounterOpts],
        group: &str,
    ) -> Result<CounterGroup, TelemetryError> {
        let mut counters = BTreeMap::new();

        for opts in counters_opts {
            if counters.contains_key(&opts.name) {
                return Err(TelemetryError::MetricsInit(format!(
                    "duplicate counter {} in group {}",
                    opts.name, group
                )));
            }

            let counter = IntCounter::with_opts(
                Opts::new(opts.name.clone(), opts.help.clone()).namespace(group),
            )
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;

            self.registry
                .register(Box::new(counter.clone()))
                .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;

            counters.insert(opts.name.clone(), counter);
        }

        tracing::debug!(group, counters = counters.len(), "Counter group registered");

        Ok(CounterGroup {
            group: group.to_string(),
            counters: Arc::new(counters),
        })
    }

    /// Encode all registered counters as Prometheus text format.
    pub fn encode(&self) -> Result<String, TelemetryError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
        String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
    }
}
