//! REST client for the RIC alarm manager.

use async_trait::async_trait;
use chrono::Utc;
use kpm_01_nb_subscription::{Alarm, AlarmClient, AlarmRaiseError};
use reqwest::Client;
use serde::Serialize;

use crate::config::EndpointsSection;

/// Path of the alarm resource below the manager's base URL.
pub const ALARMS_PATH: &str = "/ric/v1/alarms";

/// Wire body of a raised alarm.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlarmMessage {
    #[serde(rename = "managedObjectId")]
    pub managed_object_id: String,
    #[serde(rename = "applicationId")]
    pub application_id: String,
    #[serde(rename = "specificProblem")]
    pub specific_problem: i32,
    #[serde(rename = "perceivedSeverity")]
    pub perceived_severity: String,
    #[serde(rename = "additionalInfo")]
    pub additional_info: String,
    #[serde(rename = "identifyingInfo")]
    pub identifying_info: String,
    #[serde(rename = "AlarmAction")]
    pub alarm_action: String,
    /// Microseconds since the Unix epoch
    #[serde(rename = "AlarmTime")]
    pub alarm_time: i64,
}

impl AlarmMessage {
    /// Raise message for `alarm`. The affected peer goes in `identifyingInfo`,
    /// the reason in `additionalInfo`.
    pub fn raise(alarm: &Alarm, managed_object_id: &str, application_id: &str, now_us: i64) -> Self {
        Self {
            managed_object_id: managed_object_id.to_string(),
            application_id: application_id.to_string(),
            specific_problem: alarm.code,
            perceived_severity: alarm.severity.as_str().to_string(),
            additional_info: alarm.reason.clone(),
            identifying_info: alarm.affected_object.clone(),
            alarm_action: "RAISE".to_string(),
            alarm_time: now_us,
        }
    }
}

/// `AlarmClient` over the alarm manager's REST API.
pub struct AlarmManagerClient {
    client: Client,
    url: String,
    managed_object_id: String,
    application_id: String,
}

impl AlarmManagerClient {
    pub fn new(endpoints: &EndpointsSection) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(endpoints.request_timeout())
            .connect_timeout(endpoints.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            url: format!("{}{}", endpoints.alarm_url.trim_end_matches('/'), ALARMS_PATH),
            managed_object_id: endpoints.managed_object_id.clone(),
            application_id: endpoints.application_id.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl AlarmClient for AlarmManagerClient {
    async fn raise(&self, alarm: &Alarm) -> Result<(), AlarmRaiseError> {
        let body = AlarmMessage::raise(
            alarm,
            &self.managed_object_id,
            &self.application_id,
            Utc::now().timestamp_micros(),
        );

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AlarmRaiseError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(AlarmRaiseError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kpm_01_nb_subscription::AlarmSeverity;

    fn subscription_alarm() -> Alarm {
        Alarm {
            code: 8086,
            severity: AlarmSeverity::Critical,
            affected_object: "gnb_734_733_b5c67788".to_string(),
            reason: "subscriptionFailed".to_string(),
        }
    }

    #[test]
    fn test_alarm_body_shape() {
        let body = AlarmMessage::raise(&subscription_alarm(), "SEP-12/XAPP-1", "kpm-xapp", 1_700_000_000_000_000);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["managedObjectId"], "SEP-12/XAPP-1");
        assert_eq!(json["applicationId"], "kpm-xapp");
        assert_eq!(json["specificProblem"], 8086);
        assert_eq!(json["perceivedSeverity"], "CRITICAL");
        assert_eq!(json["additionalInfo"], "subscriptionFailed");
        assert_eq!(json["identifyingInfo"], "gnb_734_733_b5c67788");
        assert_eq!(json["AlarmAction"], "RAISE");
        assert_eq!(json["AlarmTime"], 1_700_000_000_000_000_i64);
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_url_from_endpoints() {
        let endpoints = EndpointsSection {
            alarm_url: "http://alarmmanager:8080/".to_string(),
            ..EndpointsSection::default()
        };
        let client = AlarmManagerClient::new(&endpoints).unwrap();
        assert_eq!(client.url(), "http://alarmmanager:8080/ric/v1/alarms");
    }

    #[tokio::test]
    async fn test_unreachable_manager_is_transport_error() {
        let endpoints = EndpointsSection {
            alarm_url: "http://127.0.0.1:1".to_string(),
            connect_timeout_ms: 200,
            request_timeout_ms: 500,
            ..EndpointsSection::default()
        };
        let client = AlarmManagerClient::new(&endpoints).unwrap();

        let result = client.raise(&subscription_alarm()).await;

        assert!(matches!(result, Err(AlarmRaiseError::Transport(_))));
    }
}
