//! Subscription request descriptor.
//!
//! Field names follow the RIC subscription manager REST schema so the request
//! can be rendered and submitted as-is.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::config::SubscriptionConfig;

/// Where the subscribed peer should deliver notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEndpoint {
    #[serde(rename = "Host")]
    pub host: String,
    /// Control-plane (HTTP) port
    #[serde(rename = "HTTPPort")]
    pub http_port: u16,
    /// Message-bus (RMR) port
    #[serde(rename = "RMRPort")]
    pub rmr_port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Report,
    Insert,
    Policy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubsequentActionType {
    Continue,
    Wait,
}

/// E2AP time-to-wait token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeToWait {
    #[serde(rename = "zero")]
    Zero,
    #[serde(rename = "w1ms")]
    W1ms,
    #[serde(rename = "w2ms")]
    W2ms,
    #[serde(rename = "w5ms")]
    W5ms,
    #[serde(rename = "w10ms")]
    W10ms,
    #[serde(rename = "w20ms")]
    W20ms,
    #[serde(rename = "w30ms")]
    W30ms,
    #[serde(rename = "w40ms")]
    W40ms,
    #[serde(rename = "w50ms")]
    W50ms,
    #[serde(rename = "w100ms")]
    W100ms,
    #[serde(rename = "w200ms")]
    W200ms,
    #[serde(rename = "w500ms")]
    W500ms,
    #[serde(rename = "w1s")]
    W1s,
    #[serde(rename = "w2s")]
    W2s,
    #[serde(rename = "w5s")]
    W5s,
    #[serde(rename = "w10s")]
    W10s,
    #[serde(rename = "w20s")]
    W20s,
    #[serde(rename = "w60s")]
    W60s,
}

impl TimeToWait {
    const ALL: [TimeToWait; 18] = [
        Self::Zero,
        Self::W1ms,
        Self::W2ms,
        Self::W5ms,
        Self::W10ms,
        Self::W20ms,
        Self::W30ms,
        Self::W40ms,
        Self::W50ms,
        Self::W100ms,
        Self::W200ms,
        Self::W500ms,
        Self::W1s,
        Self::W2s,
        Self::W5s,
        Self::W10s,
        Self::W20s,
        Self::W60s,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::W1ms => "w1ms",
            Self::W2ms => "w2ms",
            Self::W5ms => "w5ms",
            Self::W10ms => "w10ms",
            Self::W20ms => "w20ms",
            Self::W30ms => "w30ms",
            Self::W40ms => "w40ms",
            Self::W50ms => "w50ms",
            Self::W100ms => "w100ms",
            Self::W200ms => "w200ms",
            Self::W500ms => "w500ms",
            Self::W1s => "w1s",
            Self::W2s => "w2s",
            Self::W5s => "w5s",
            Self::W10s => "w10s",
            Self::W20s => "w20s",
            Self::W60s => "w60s",
        }
    }
}

impl fmt::Display for TimeToWait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeToWait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown time-to-wait token: {s}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsequentAction {
    #[serde(rename = "SubsequentActionType")]
    pub action_type: SubsequentActionType,
    #[serde(rename = "TimeToWait")]
    pub time_to_wait: TimeToWait,
}

/// One action to set up on the peer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    #[serde(rename = "ActionID")]
    pub action_id: i64,
    #[serde(rename = "ActionType")]
    pub action_type: ActionType,
    /// Opaque, service-model specific
    #[serde(rename = "ActionDefinition")]
    pub action_definition: Vec<i64>,
    #[serde(
        rename = "SubsequentAction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub subsequent_action: Option<SubsequentAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionDetail {
    #[serde(rename = "XappEventInstanceID")]
    pub xapp_event_instance_id: i64,
    /// Opaque, service-model specific
    #[serde(rename = "EventTriggers")]
    pub event_triggers: Vec<i64>,
    #[serde(rename = "ActionToBeSetupList")]
    pub actions: Vec<ActionSpec>,
}

/// One outbound subscription intent, built right before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    #[serde(rename = "ClientEndpoint")]
    pub client_endpoint: ClientEndpoint,
    /// Target peer inventory name
    #[serde(rename = "Meid")]
    pub meid: String,
    #[serde(rename = "RANFunctionID")]
    pub ran_function_id: i64,
    #[serde(rename = "SubscriptionDetails")]
    pub details: Vec<SubscriptionDetail>,
}

impl SubscriptionRequest {
    /// Build the request for one peer from the immutable subscription config.
    pub fn for_peer(config: &SubscriptionConfig, meid: &str) -> Self {
        Self {
            client_endpoint: config.client_endpoint.clone(),
            meid: meid.to_string(),
            ran_function_id: config.ran_function_id,
            details: vec![SubscriptionDetail {
                xapp_event_instance_id: config.event_instance_id,
                event_triggers: config.event_triggers.clone(),
                actions: config.actions.clone(),
            }],
        }
    }

    /// Pretty-printed JSON body, as sent to the subscription manager.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
