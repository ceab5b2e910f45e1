//! Immutable subscription parameters.
//!
//! Everything that is constant for the xApp's single subscription use-case
//! lives here and is handed to the service at construction.

use super::alarm::AlarmSeverity;
use super::errors::SubscriptionConfigError;
use super::subscription::{
    ActionSpec, ActionType, ClientEndpoint, SubsequentAction, SubsequentActionType, TimeToWait,
};

/// Alarm code raised when a peer subscription fails.
pub const SUBSCRIPTION_FAILED_ALARM_CODE: i32 = 8086;

/// Alarm reason raised when a peer subscription fails.
pub const SUBSCRIPTION_FAILED_REASON: &str = "subscriptionFailed";

/// How per-peer submissions are scheduled within one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    /// Each peer strictly after the previous one completes or fails.
    Sequential,
    /// Up to `max_in_flight` submissions outstanding at once.
    Concurrent { max_in_flight: usize },
}

/// Alarm raised for a failed subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmSpec {
    pub code: i32,
    pub severity: AlarmSeverity,
    pub reason: String,
}

impl Default for AlarmSpec {
    fn default() -> Self {
        Self {
            code: SUBSCRIPTION_FAILED_ALARM_CODE,
            severity: AlarmSeverity::Critical,
            reason: SUBSCRIPTION_FAILED_REASON.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionConfig {
    pub client_endpoint: ClientEndpoint,
    pub ran_function_id: i64,
    pub event_instance_id: i64,
    pub event_triggers: Vec<i64>,
    /// Must not be empty.
    pub actions: Vec<ActionSpec>,
    pub alarm: AlarmSpec,
    pub submission: SubmissionMode,
    /// Emit the rendered JSON body of every request at debug level.
    pub trace_request_body: bool,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            client_endpoint: ClientEndpoint {
                host: "service-ricxapp-kpm-rmr.ricxapp".to_string(),
                http_port: 8080,
                rmr_port: 4560,
            },
            ran_function_id: 1,
            event_instance_id: 1234,
            event_triggers: vec![1, 2, 3, 4],
            actions: vec![ActionSpec {
                action_id: 1,
                action_type: ActionType::Report,
                action_definition: vec![1, 2, 3, 4],
                subsequent_action: Some(SubsequentAction {
                    action_type: SubsequentActionType::Continue,
                    time_to_wait: TimeToWait::W10ms,
                }),
            }],
            alarm: AlarmSpec::default(),
            submission: SubmissionMode::Sequential,
            trace_request_body: true,
        }
    }
}

impl SubscriptionConfig {
    /// Check the invariants the orchestrator relies on.
    pub fn validate(&self) -> Result<(), SubscriptionConfigError> {
        if self.client_endpoint.host.trim().is_empty() {
            return Err(SubscriptionConfigError::EmptyHost);
        }
        if self.client_endpoint.http_port == 0 {
            return Err(SubscriptionConfigError::ZeroPort("http_port"));
        }
        if self.client_endpoint.rmr_port == 0 {
            return Err(SubscriptionConfigError::ZeroPort("rmr_port"));
        }
        if self.actions.is_empty() {
            return Err(SubscriptionConfigError::NoActions);
        }
        if let SubmissionMode::Concurrent { max_in_flight: 0 } = self.submission {
            return Err(SubscriptionConfigError::ZeroConcurrency);
        }
        Ok(())
    }

    /// Config with sequential submission and no body tracing, for tests.
    pub fn for_testing() -> Self {
        Self {
            trace_request_body: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SubscriptionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ran_function_id, 1);
        assert_eq!(config.actions[0].action_id, 1);
        assert_eq!(config.alarm.code, 8086);
        assert_eq!(config.alarm.severity, AlarmSeverity::Critical);
        assert_eq!(config.alarm.reason, "subscriptionFailed");
        assert_eq!(config.submission, SubmissionMode::Sequential);
    }

    #[test]
    fn test_empty_actions_rejected() {
        let config = SubscriptionConfig {
            actions: vec![],
            ..SubscriptionConfig::default()
        };
        assert_eq!(config.validate(), Err(SubscriptionConfigError::NoActions));
    }

    #[test]
    fn test_zero_ports_rejected() {
        let mut config = SubscriptionConfig::default();
        config.client_endpoint.rmr_port = 0;
        assert_eq!(
            config.validate(),
            Err(SubscriptionConfigError::ZeroPort("rmr_port"))
        );

        let mut config = SubscriptionConfig::default();
        config.client_endpoint.http_port = 0;
        assert_eq!(
            config.validate(),
            Err(SubscriptionConfigError::ZeroPort("http_port"))
        );
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = SubscriptionConfig {
            submission: SubmissionMode::Concurrent { max_in_flight: 0 },
            ..SubscriptionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(SubscriptionConfigError::ZeroConcurrency)
        );
    }

    #[test]
    fn test_blank_host_rejected() {
        let mut config = SubscriptionConfig::default();
        config.client_endpoint.host = "  ".to_string();
        assert_eq!(config.validate(), Err(SubscriptionConfigError::EmptyHost));
    }
}
