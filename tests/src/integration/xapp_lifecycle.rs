//! # xApp Lifecycle
//!
//! Config file -> runtime -> ready -> message delivery -> shutdown, with the
//! REST clients replaced by in-memory doubles.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;

    use kpm_01_nb_subscription::test_utils::{RecordingAlarmClient, RecordingSubscriptionClient};
    use kpm_01_nb_subscription::{NbSubscriptionService, SubmissionMode};
    use kpm_02_message_dispatch::{DefaultMessageHandler, RicMessage, RicMessageType, RIC_INDICATION_RX};
    use kpm_runtime::adapters::StaticPeerDirectory;
    use kpm_runtime::{AppConfig, DeliveryStats, XappRuntime};
    use kpm_telemetry::CounterRegistry;

    const CONFIG: &str = r#"
[subscription]
host = "kpm-xapp.ricxapp"
mode = "concurrent"
max_in_flight = 2

[peers]
enbs = ["enb_1", "enb_2"]
gnbs = ["gnb_1"]

[metrics]
report_interval_secs = 0

[delivery]
channel_capacity = 8
"#;

    fn load_config() -> AppConfig {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        AppConfig::load(file.path()).unwrap()
    }

    struct Running {
        runtime: Arc<XappRuntime>,
        subscriptions: Arc<RecordingSubscriptionClient>,
        alarms: Arc<RecordingAlarmClient>,
    }

    fn start(config: AppConfig, subscriptions: RecordingSubscriptionClient) -> Running {
        let subscriptions = Arc::new(subscriptions);
        let alarms = Arc::new(RecordingAlarmClient::new());
        let orchestrator = NbSubscriptionService::new(
            config.subscription_config().unwrap(),
            Arc::new(StaticPeerDirectory::new(&config.peers)),
            subscriptions.clone(),
            alarms.clone(),
        )
        .unwrap();

        let registry = CounterRegistry::new();
        let handler = DefaultMessageHandler::register(&registry).unwrap();
        let runtime = XappRuntime::assemble(
            config,
            Arc::new(orchestrator),
            Arc::new(handler),
            registry,
        );

        Running {
            runtime: Arc::new(runtime),
            subscriptions,
            alarms,
        }
    }

    #[test]
    fn config_file_drives_subscription_parameters() {
        let config = load_config();
        let subscription = config.subscription_config().unwrap();

        assert_eq!(subscription.client_endpoint.host, "kpm-xapp.ricxapp");
        assert_eq!(
            subscription.submission,
            SubmissionMode::Concurrent { max_in_flight: 2 }
        );
        assert_eq!(config.peers.enbs, vec!["enb_1", "enb_2"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn full_lifecycle_with_one_failing_peer() {
        let app = start(
            load_config(),
            RecordingSubscriptionClient::new().fail_for("enb_2"),
        );
        let pool = app.runtime.buffer_pool();
        let (tx, rx) = app.runtime.delivery_channel();

        let delivery = {
            let runtime = Arc::clone(&app.runtime);
            tokio::spawn(async move { runtime.run_delivery(rx).await })
        };
        assert!(app.runtime.spawn_metrics_reporter().is_none());

        let report = app.runtime.on_ready().await;
        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(app.subscriptions.call_count(), 3);
        assert_eq!(app.alarms.count(), 1);
        assert_eq!(app.alarms.alarms()[0].affected_object, "enb_2");

        for i in 0..20 {
            let kind = if i % 4 == 0 {
                RicMessageType::HealthCheckReq
            } else {
                RicMessageType::Indication
            };
            let msg = RicMessage::new(kind.mtype(), "gnb_1", 7, "", vec![0; 16]);
            tx.send(pool.attach(msg)).await.unwrap();
        }
        app.runtime.shutdown();

        let stats = tokio::time::timeout(Duration::from_secs(5), delivery)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            stats,
            DeliveryStats {
                consumed: 20,
                ignored: 0,
                handler_errors: 0,
            }
        );
        assert_eq!(app.runtime.stats().value(RIC_INDICATION_RX), Some(15));
        assert_eq!(pool.outstanding(), 0);
        assert!(app
            .runtime
            .encode_metrics()
            .unwrap()
            .contains("kpm_app_RICIndicationRx 15"));
    }

    #[tokio::test]
    async fn empty_inventory_still_delivers_messages() {
        let app = start(AppConfig::default(), RecordingSubscriptionClient::new());
        let pool = app.runtime.buffer_pool();
        let (tx, rx) = app.runtime.delivery_channel();

        let report = app.runtime.on_ready().await;
        assert!(report.outcomes.is_empty());
        assert_eq!(app.subscriptions.call_count(), 0);

        tx.send(pool.attach(RicMessage::new(
            RicMessageType::Indication.mtype(),
            "enb_9",
            1,
            "",
            Vec::new(),
        )))
        .await
        .unwrap();
        drop(tx);

        let stats = app.runtime.run_delivery(rx).await;
        assert_eq!(stats.consumed, 1);
        assert_eq!(pool.outstanding(), 0);
    }
}
