//! # xApp Configuration
//!
//! TOML document with one section per concern. Every section and field has a
//! default, so a missing file or a partial file is valid.
//!
//! ```toml
//! [subscription]
//! host = "service-ricxapp-kpm-rmr.ricxapp"
//! http_port = 8080
//! rmr_port = 4560
//! ran_function_id = 1
//! mode = "sequential"        # or "concurrent"
//! max_in_flight = 4
//!
//! [[subscription.actions]]
//! action_id = 1
//! action_type = "report"
//! action_definition = [1, 2, 3, 4]
//! subsequent_action_type = "continue"
//! time_to_wait = "w10ms"
//!
//! [endpoints]
//! submgr_url = "http://service-ricplt-submgr-http.ricplt:8088"
//! alarm_url = "http://service-ricplt-alarmmanager-http.ricplt:8080"
//!
//! [peers]
//! enbs = ["enb_208_092_00000001"]
//! gnbs = []
//!
//! [metrics]
//! report_interval_secs = 60
//!
//! [delivery]
//! channel_capacity = 1024
//! ```
//!
//! Environment overrides, applied after the file:
//!
//! | Variable | Field |
//! |---|---|
//! | `KPM_CONFIG` | path of the file itself (default `config/config-file.toml`) |
//! | `KPM_SUBMGR_URL` | `endpoints.submgr_url` |
//! | `KPM_ALARM_URL` | `endpoints.alarm_url` |
//! | `KPM_XAPP_HOST` | `subscription.host` |

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use kpm_01_nb_subscription::{
    ActionSpec, ActionType, AlarmSeverity, AlarmSpec, ClientEndpoint, SubmissionMode,
    SubscriptionConfig, SubscriptionConfigError, SubsequentAction, SubsequentActionType,
    TimeToWait, SUBSCRIPTION_FAILED_ALARM_CODE, SUBSCRIPTION_FAILED_REASON,
};
use serde::Deserialize;
use thiserror::Error;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config/config-file.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("invalid subscription parameters: {0}")]
    Subscription(#[from] SubscriptionConfigError),
}

/// Complete xApp configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub subscription: SubscriptionSection,
    pub endpoints: EndpointsSection,
    pub peers: PeersSection,
    pub metrics: MetricsSection,
    pub delivery: DeliverySection,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Sequential,
    Concurrent,
}

/// `[subscription]`: parameters of the single KPM subscription use-case.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SubscriptionSection {
    /// Host the RIC delivers notifications to
    pub host: String,
    pub http_port: u16,
    pub rmr_port: u16,
    pub ran_function_id: i64,
    pub event_instance_id: i64,
    pub event_triggers: Vec<i64>,
    pub actions: Vec<ActionSection>,
    pub mode: ModeSetting,
    /// Only used in concurrent mode
    pub max_in_flight: usize,
    pub trace_request_body: bool,
    pub alarm_code: i32,
    pub alarm_severity: String,
}

impl Default for SubscriptionSection {
    fn default() -> Self {
        let defaults = SubscriptionConfig::default();
        Self {
            host: defaults.client_endpoint.host,
            http_port: defaults.client_endpoint.http_port,
            rmr_port: defaults.client_endpoint.rmr_port,
            ran_function_id: defaults.ran_function_id,
            event_instance_id: defaults.event_instance_id,
            event_triggers: defaults.event_triggers,
            actions: vec![ActionSection::default()],
            mode: ModeSetting::Sequential,
            max_in_flight: 4,
            trace_request_body: defaults.trace_request_body,
            alarm_code: SUBSCRIPTION_FAILED_ALARM_CODE,
            alarm_severity: AlarmSeverity::Critical.as_str().to_string(),
        }
    }
}

/// One `[[subscription.actions]]` entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ActionSection {
    pub action_id: i64,
    pub action_type: ActionType,
    pub action_definition: Vec<i64>,
    /// An entry without it sends no subsequent action.
    #[serde(default)]
    pub subsequent_action_type: Option<SubsequentActionType>,
    pub time_to_wait: String,
}

impl Default for ActionSection {
    fn default() -> Self {
        Self {
            action_id: 1,
            action_type: ActionType::Report,
            action_definition: vec![1, 2, 3, 4],
            subsequent_action_type: Some(SubsequentActionType::Continue),
            time_to_wait: TimeToWait::W10ms.as_str().to_string(),
        }
    }
}

/// `[endpoints]`: platform services the xApp calls.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EndpointsSection {
    pub submgr_url: String,
    pub alarm_url: String,
    /// Reported as `managedObjectId` on alarms
    pub managed_object_id: String,
    /// Reported as `applicationId` on alarms
    pub application_id: String,
    pub request_timeout_ms: u64,
    pub connect_timeout_ms: u64,
}

impl Default for EndpointsSection {
    fn default() -> Self {
        Self {
            submgr_url: "http://service-ricplt-submgr-http.ricplt:8088".to_string(),
            alarm_url: "http://service-ricplt-alarmmanager-http.ricplt:8080".to_string(),
            managed_object_id: "SEP-12/XAPP-1".to_string(),
            application_id: "kpm-xapp".to_string(),
            request_timeout_ms: 5_000,
            connect_timeout_ms: 2_000,
        }
    }
}

impl EndpointsSection {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

/// `[peers]`: inventory names served by the static peer directory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PeersSection {
    pub enbs: Vec<String>,
    pub gnbs: Vec<String>,
}

/// `[metrics]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MetricsSection {
    /// Period of the counter snapshot log line; 0 disables it.
    pub report_interval_secs: u64,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            report_interval_secs: 60,
        }
    }
}

/// `[delivery]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeliverySection {
    /// Bound of the inbound message channel.
    pub channel_capacity: usize,
}

impl Default for DeliverySection {
    fn default() -> Self {
        Self {
            channel_capacity: 1024,
        }
    }
}

impl AppConfig {
    /// Load from `KPM_CONFIG` (or the default path), then apply env overrides.
    ///
    /// A missing file yields the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = config_path();
        let mut config = Self::load_or_default(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load a file, falling back to defaults if it does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.as_ref().display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            }),
        }
    }

    /// Load a file that must exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply the `KPM_*` overrides using `lookup` for variable values.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("KPM_SUBMGR_URL") {
            self.endpoints.submgr_url = url;
        }
        if let Some(url) = lookup("KPM_ALARM_URL") {
            self.endpoints.alarm_url = url;
        }
        if let Some(host) = lookup("KPM_XAPP_HOST") {
            self.subscription.host = host;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoints.submgr_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "endpoints.submgr_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.endpoints.alarm_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "endpoints.alarm_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.delivery.channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "delivery.channel_capacity",
                reason: "must be non-zero".to_string(),
            });
        }
        self.subscription_config()?.validate()?;
        Ok(())
    }

    /// Build the orchestrator's immutable parameters.
    pub fn subscription_config(&self) -> Result<SubscriptionConfig, ConfigError> {
        let s = &self.subscription;

        let actions = s
            .actions
            .iter()
            .map(ActionSection::to_action)
            .collect::<Result<Vec<_>, _>>()?;

        let severity = s
            .alarm_severity
            .parse::<AlarmSeverity>()
            .map_err(|reason| ConfigError::Invalid {
                field: "subscription.alarm_severity",
                reason,
            })?;

        let submission = match s.mode {
            ModeSetting::Sequential => SubmissionMode::Sequential,
            ModeSetting::Concurrent => SubmissionMode::Concurrent {
                max_in_flight: s.max_in_flight,
            },
        };

        Ok(SubscriptionConfig {
            client_endpoint: ClientEndpoint {
                host: s.host.clone(),
                http_port: s.http_port,
                rmr_port: s.rmr_port,
            },
            ran_function_id: s.ran_function_id,
            event_instance_id: s.event_instance_id,
            event_triggers: s.event_triggers.clone(),
            actions,
            alarm: AlarmSpec {
                code: s.alarm_code,
                severity,
                reason: SUBSCRIPTION_FAILED_REASON.to_string(),
            },
            submission,
            trace_request_body: s.trace_request_body,
        })
    }
}

impl ActionSection {
    fn to_action(&self) -> Result<ActionSpec, ConfigError> {
        let subsequent_action = match self.subsequent_action_type {
            Some(action_type) => Some(SubsequentAction {
                action_type,
                time_to_wait: self.time_to_wait.parse::<TimeToWait>().map_err(|reason| {
                    ConfigError::Invalid {
                        field: "subscription.actions.time_to_wait",
                        reason,
                    }
                })?,
            }),
            None => None,
        };

        Ok(ActionSpec {
            action_id: self.action_id,
            action_type: self.action_type,
            action_definition: self.action_definition.clone(),
            subsequent_action,
        })
    }
}

/// Path named by `KPM_CONFIG`, or the default.
pub fn config_path() -> PathBuf {
    std::env::var("KPM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}
