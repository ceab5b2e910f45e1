//! # Dispatch Flow
//!
//! Messages carrying pool-issued buffers go through the dispatcher with the
//! default handler; counters and buffer accounting are checked afterwards.

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;

    use kpm_02_message_dispatch::test_utils::{RecordingBufferReleaser, Script, ScriptedMessageHandler};
    use kpm_02_message_dispatch::{
        counter_opts, DefaultMessageHandler, Dispatched, MessageConsumer, MessageDispatcher,
        MessageHandler, RicMessage, RicMessageType, COUNTER_GROUP, RIC_INDICATION_RX,
    };
    use kpm_runtime::adapters::HeapBufferPool;
    use kpm_telemetry::CounterRegistry;

    fn message(mtype: RicMessageType) -> RicMessage {
        RicMessage::new(mtype.mtype(), "gnb_734_733_b5c67788", 1, "xid", vec![0; 64])
    }

    #[test]
    fn scenario_c_thousand_alternating_messages() {
        let registry = CounterRegistry::new();
        let handler = Arc::new(DefaultMessageHandler::register(&registry).unwrap());
        let releaser = Arc::new(RecordingBufferReleaser::new());
        let dispatcher = MessageDispatcher::new(handler.clone(), releaser.clone());

        for i in 0..1000u64 {
            let kind = if i % 2 == 0 {
                RicMessageType::Indication
            } else {
                RicMessageType::HealthCheckReq
            };
            dispatcher
                .consume(message(kind).with_buffer(kpm_02_message_dispatch::BufferHandle::new(i)))
                .unwrap();
        }

        assert_eq!(handler.stats().value(RIC_INDICATION_RX), Some(500));
        assert_eq!(releaser.attempts(), 1000);
        assert!((0..1000).all(|id| releaser.release_count(id) == 1));
    }

    #[test]
    fn pool_is_empty_after_every_kind_of_message() {
        let pool = Arc::new(HeapBufferPool::new());
        let handler = Arc::new(DefaultMessageHandler::register(&CounterRegistry::new()).unwrap());
        let dispatcher = MessageDispatcher::new(handler.clone(), pool.clone());

        let mut outcomes = Vec::new();
        for kind in RicMessageType::all() {
            outcomes.push(dispatcher.consume(pool.attach(message(kind))).unwrap());
        }
        outcomes.push(
            dispatcher
                .consume(pool.attach(RicMessage::new(31337, "enb1", -1, "", Vec::new())))
                .unwrap(),
        );

        assert_eq!(pool.outstanding(), 0);
        assert_eq!(pool.allocated(), 9);
        assert_eq!(outcomes.iter().filter(|o| o.is_ignored()).count(), 6);
        assert!(outcomes.contains(&Dispatched::Indication));
        assert!(outcomes.contains(&Dispatched::HealthCheck));
        assert!(outcomes.contains(&Dispatched::SubscriptionResponse));
        assert_eq!(handler.stats().value(RIC_INDICATION_RX), Some(1));
    }

    #[test]
    fn panicking_handler_leaves_no_outstanding_buffer() {
        let pool = Arc::new(HeapBufferPool::new());
        let stats = CounterRegistry::new()
            .register_counter_group(&counter_opts(), COUNTER_GROUP)
            .unwrap();
        let handler = Arc::new(ScriptedMessageHandler::scripted(stats, Script::Panic));
        let dispatcher = MessageDispatcher::new(handler, pool.clone());

        let msg = pool.attach(message(RicMessageType::Indication));
        let result = catch_unwind(AssertUnwindSafe(|| dispatcher.consume(msg)));

        assert!(result.is_err());
        assert_eq!(pool.outstanding(), 0);
    }

    #[test]
    fn counters_shared_by_parallel_dispatchers() {
        let registry = CounterRegistry::new();
        let handler: Arc<dyn MessageHandler> =
            Arc::new(DefaultMessageHandler::register(&registry).unwrap());
        let pool = Arc::new(HeapBufferPool::new());

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let dispatcher = MessageDispatcher::new(handler.clone(), pool.clone());
                let pool = pool.clone();
                std::thread::spawn(move || {
                    for _ in 0..125 {
                        let msg = pool.attach(message(RicMessageType::Indication));
                        dispatcher.consume(msg).unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(handler.stats().value(RIC_INDICATION_RX), Some(1000));
        assert_eq!(pool.outstanding(), 0);
        assert!(registry
            .encode()
            .unwrap()
            .contains("kpm_app_RICIndicationRx 1000"));
    }
}
