//! Per-peer subscription submission and failure alarms.

use futures::stream::{self, StreamExt};
use kpm_telemetry::log_peer_event;
use tracing::debug;

use super::core::{NbSubscriptionService, SUBSYSTEM};
use crate::domain::{
    Alarm, AlarmStatus, PeerIdentity, SubmissionMode, SubscriptionOutcome, SubscriptionRequest,
};

impl NbSubscriptionService {
    /// Submit one request per peer, returning outcomes in `peers` order.
    pub(crate) async fn submit_all(&self, peers: &[PeerIdentity]) -> Vec<SubscriptionOutcome> {
        match self.config.submission {
            SubmissionMode::Sequential => {
                let mut outcomes = Vec::with_capacity(peers.len());
                for peer in peers {
                    outcomes.push(self.subscribe_peer(peer).await);
                }
                outcomes
            }
            SubmissionMode::Concurrent { max_in_flight } => {
                // `buffered` yields in input order, so each outcome stays paired with its peer.
                let pending: Vec<_> = peers.iter().map(|peer| self.subscribe_peer(peer)).collect();
                stream::iter(pending)
                    .buffered(max_in_flight.max(1))
                    .collect()
                    .await
            }
        }
    }

    /// Build, submit and (on failure) alarm for a single peer.
    pub(crate) async fn subscribe_peer(&self, peer: &PeerIdentity) -> SubscriptionOutcome {
        let meid = peer.inventory_name();
        log_peer_event!(info, SUBSYSTEM, "Sending subscription request", meid);

        let request = SubscriptionRequest::for_peer(&self.config, meid);
        if self.config.trace_request_body {
            match request.render_json() {
                Ok(body) => debug!(subsystem = SUBSYSTEM, meid, %body, "Subscription request body"),
                Err(e) => debug!(subsystem = SUBSYSTEM, meid, error = %e, "Could not render request body"),
            }
        }

        match self.subscriptions.subscribe(&request).await {
            Ok(subscription_id) => {
                log_peer_event!(
                    info,
                    SUBSYSTEM,
                    "Subscription successful",
                    meid,
                    subscription_id = %subscription_id
                );
                SubscriptionOutcome::Subscribed {
                    peer: peer.clone(),
                    subscription_id,
                }
            }
            Err(error) => {
                log_peer_event!(error, SUBSYSTEM, "Subscription failed", meid, error = %error);
                let alarm = self.raise_subscription_alarm(meid).await;
                SubscriptionOutcome::Failed {
                    peer: peer.clone(),
                    error,
                    alarm,
                }
            }
        }
    }

    /// Raise the configured alarm for `meid`. A failing alarm channel is logged, never escalated.
    async fn raise_subscription_alarm(&self, meid: &str) -> AlarmStatus {
        let alarm = Alarm {
            code: self.config.alarm.code,
            severity: self.config.alarm.severity,
            affected_object: meid.to_string(),
            reason: self.config.alarm.reason.clone(),
        };

        match self.alarms.raise(&alarm).await {
            Ok(()) => {
                log_peer_event!(
                    warn,
                    SUBSYSTEM,
                    "Alarm raised",
                    meid,
                    code = alarm.code,
                    severity = %alarm.severity
                );
                AlarmStatus::Raised
            }
            Err(e) => {
                log_peer_event!(error, SUBSYSTEM, "Raising alarm failed", meid, error = %e);
                AlarmStatus::RaiseFailed(e)
            }
        }
    }
}
