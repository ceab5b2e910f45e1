//! REST client for the RIC subscription manager.

use async_trait::async_trait;
use kpm_01_nb_subscription::{
    SubscriptionClient, SubscriptionId, SubscriptionRequest, SubscriptionSubmitError,
};
use reqwest::Client;
use serde::Deserialize;

use crate::config::EndpointsSection;

/// Path of the subscription resource below the manager's base URL.
pub const SUBSCRIPTIONS_PATH: &str = "/ric/v1/subscriptions";

/// Body returned on an accepted subscription.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubscriptionResponse {
    #[serde(rename = "SubscriptionId")]
    pub subscription_id: String,
    #[serde(rename = "SubscriptionInstances", default)]
    pub instances: Vec<serde_json::Value>,
}

impl SubscriptionResponse {
    pub fn parse(body: &str) -> Result<Self, SubscriptionSubmitError> {
        let response: Self = serde_json::from_str(body)
            .map_err(|e| SubscriptionSubmitError::InvalidResponse(e.to_string()))?;
        if response.subscription_id.is_empty() {
            return Err(SubscriptionSubmitError::InvalidResponse(
                "empty SubscriptionId".to_string(),
            ));
        }
        Ok(response)
    }
}

/// `SubscriptionClient` over the subscription manager's REST API.
pub struct SubscriptionManagerClient {
    client: Client,
    url: String,
}

impl SubscriptionManagerClient {
    /// Create a client for `endpoints.submgr_url` with the configured timeouts.
    pub fn new(endpoints: &EndpointsSection) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(endpoints.request_timeout())
            .connect_timeout(endpoints.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            url: subscriptions_url(&endpoints.submgr_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubscriptionClient for SubscriptionManagerClient {
    async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionId, SubscriptionSubmitError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| SubscriptionSubmitError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubscriptionSubmitError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SubscriptionSubmitError::Rejected {
                status: status.as_u16(),
                reason: body,
            });
        }

        let parsed = SubscriptionResponse::parse(&body)?;
        Ok(SubscriptionId::new(parsed.subscription_id))
    }
}

fn subscriptions_url(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), SUBSCRIPTIONS_PATH)
}
