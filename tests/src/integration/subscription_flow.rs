//! # Subscription Flow
//!
//! Discovery -> per-peer subscription -> alarm on failure, through the
//! orchestrator's public API only.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kpm_01_nb_subscription::test_utils::{
        InMemoryPeerDirectory, RecordingAlarmClient, RecordingSubscriptionClient,
    };
    use kpm_01_nb_subscription::{
        AlarmSeverity, DiscoveryError, NbSubscriptionApi, NbSubscriptionService, PeerKind,
        SubmissionMode, SubscriptionConfig, SubscriptionOutcome, SUBSCRIPTION_FAILED_ALARM_CODE,
    };

    use crate::integration::log_capture::CapturedLogs;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Wiring {
        service: NbSubscriptionService,
        subscriptions: Arc<RecordingSubscriptionClient>,
        alarms: Arc<RecordingAlarmClient>,
    }

    fn wire(
        config: SubscriptionConfig,
        directory: InMemoryPeerDirectory,
        subscriptions: RecordingSubscriptionClient,
    ) -> Wiring {
        let subscriptions = Arc::new(subscriptions);
        let alarms = Arc::new(RecordingAlarmClient::new());
        let service = NbSubscriptionService::new(
            config,
            Arc::new(directory),
            subscriptions.clone(),
            alarms.clone(),
        )
        .unwrap();
        Wiring {
            service,
            subscriptions,
            alarms,
        }
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[tokio::test]
    async fn scenario_a_one_enb_one_gnb_both_subscribed() {
        let (logs, _guard) = CapturedLogs::install();
        let w = wire(
            SubscriptionConfig::for_testing(),
            InMemoryPeerDirectory::new()
                .with_enbs(["enb1"])
                .with_gnbs(["gnb1"]),
            RecordingSubscriptionClient::new(),
        );

        let report = w.service.subscribe_to_all().await;

        assert_eq!(w.subscriptions.submitted_meids(), vec!["enb1", "gnb1"]);
        assert_eq!(w.alarms.count(), 0);
        assert!(report.is_complete_success());
        assert_eq!(logs.count_lines("Subscription successful"), 2);
    }

    #[tokio::test]
    async fn scenario_b_failed_enb_raises_critical_alarm() {
        let w = wire(
            SubscriptionConfig::for_testing(),
            InMemoryPeerDirectory::new().with_enbs(["enb1"]),
            RecordingSubscriptionClient::new().fail_for("enb1"),
        );

        let report = w.service.subscribe_to_all().await;

        assert_eq!(w.subscriptions.call_count(), 1);
        let alarms = w.alarms.alarms();
        assert_eq!(alarms.len(), 1);
        assert_eq!(alarms[0].affected_object, "enb1");
        assert_eq!(alarms[0].severity, AlarmSeverity::Critical);
        assert_eq!(alarms[0].code, SUBSCRIPTION_FAILED_ALARM_CODE);
        assert_eq!(report.failure_count(), 1);
    }

    #[tokio::test]
    async fn degraded_discovery_subscribes_remaining_kind() {
        let w = wire(
            SubscriptionConfig::for_testing(),
            InMemoryPeerDirectory::new()
                .failing_enbs(DiscoveryError::Unavailable("rnib unreachable".to_string()))
                .with_gnbs(["gnb1", "gnb2"]),
            RecordingSubscriptionClient::new(),
        );

        let report = w.service.subscribe_to_all().await;

        assert_eq!(w.subscriptions.submitted_meids(), vec!["gnb1", "gnb2"]);
        assert!(report
            .outcomes
            .iter()
            .all(|o| o.peer().kind() == PeerKind::Gnb));
        assert!(report.enb_error.is_some());
        assert_eq!(w.alarms.count(), 0);
    }

    #[tokio::test]
    async fn request_bodies_carry_each_peer_as_meid() {
        let w = wire(
            SubscriptionConfig::for_testing(),
            InMemoryPeerDirectory::new()
                .with_enbs(["enb1"])
                .with_gnbs(["gnb1"]),
            RecordingSubscriptionClient::new(),
        );

        w.service.subscribe_to_all().await;

        for request in w.subscriptions.requests() {
            let body = request.render_json().unwrap();
            assert!(body.contains(&format!("\"Meid\": \"{}\"", request.meid)));
            assert!(body.contains("\"RANFunctionID\": 1"));
            assert!(body.contains("\"ActionToBeSetupList\""));
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_pass_attributes_alarms_to_failing_peers() {
        let config = SubscriptionConfig {
            submission: SubmissionMode::Concurrent { max_in_flight: 4 },
            ..SubscriptionConfig::for_testing()
        };
        let enbs: Vec<String> = (0..10).map(|i| format!("enb{i}")).collect();
        let gnbs: Vec<String> = (0..10).map(|i| format!("gnb{i}")).collect();
        let w = wire(
            config,
            InMemoryPeerDirectory::new()
                .with_enbs(enbs.clone())
                .with_gnbs(gnbs.clone()),
            RecordingSubscriptionClient::new()
                .fail_for("enb3")
                .fail_for("gnb7"),
        );

        let report = w.service.subscribe_to_all().await;

        let expected: Vec<String> = enbs.into_iter().chain(gnbs).collect();
        let reported: Vec<&str> = report
            .outcomes
            .iter()
            .map(|o| o.peer().inventory_name())
            .collect();
        assert_eq!(reported, expected);

        let failed: Vec<&str> = report
            .failed()
            .map(SubscriptionOutcome::peer)
            .map(|p| p.inventory_name())
            .collect();
        assert_eq!(failed, vec!["enb3", "gnb7"]);

        let mut alarmed: Vec<String> = w
            .alarms
            .alarms()
            .into_iter()
            .map(|a| a.affected_object)
            .collect();
        alarmed.sort();
        assert_eq!(alarmed, vec!["enb3", "gnb7"]);
    }
}
