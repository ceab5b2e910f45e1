use async_trait::async_trait;
use kpm_telemetry::log_event;

use super::core::{NbSubscriptionService, SUBSYSTEM};
use crate::domain::{DiscoverySnapshot, SubscriptionReport};
use crate::ports::NbSubscriptionApi;

#[async_trait]
impl NbSubscriptionApi for NbSubscriptionService {
    async fn discover_peers(&self) -> DiscoverySnapshot {
        self.discover().await
    }

    async fn subscribe_to_all(&self) -> SubscriptionReport {
        let DiscoverySnapshot {
            peers,
            enb_error,
            gnb_error,
        } = self.discover().await;

        let outcomes = self.submit_all(&peers).await;

        let report = SubscriptionReport {
            outcomes,
            enb_error,
            gnb_error,
        };

        log_event!(
            info,
            SUBSYSTEM,
            "Subscription pass finished",
            subscribed = report.success_count(),
            failed = report.failure_count()
        );

        report
    }
}
