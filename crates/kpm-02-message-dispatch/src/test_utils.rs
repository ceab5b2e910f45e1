//! Recording doubles for the driven ports.
//!
//! Enable with the `test-utils` feature flag.

use kpm_telemetry::CounterGroup;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{BufferHandle, BufferReleaseError, HandlerError, RicMessage};
use crate::ports::{BufferReleaser, MessageHandler};
use crate::service::RIC_INDICATION_RX;

/// Buffer releaser that records the id of every release attempt.
#[derive(Debug, Default)]
pub struct RecordingBufferReleaser {
    released: Mutex<Vec<u64>>,
    failing: bool,
}

impl RecordingBufferReleaser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record attempts but report each one as failed.
    pub fn failing() -> Self {
        Self {
            released: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    /// Ids of every release attempt, in order.
    pub fn released(&self) -> Vec<u64> {
        self.released.lock().clone()
    }

    pub fn attempts(&self) -> usize {
        self.released.lock().len()
    }

    /// How many times `id` was released.
    pub fn release_count(&self, id: u64) -> usize {
        self.released.lock().iter().filter(|r| **r == id).count()
    }
}

impl BufferReleaser for RecordingBufferReleaser {
    fn release(&self, buffer: BufferHandle) -> Result<(), BufferReleaseError> {
        self.released.lock().push(buffer.id());
        if self.failing {
            return Err(BufferReleaseError::Framework("release refused".to_string()));
        }
        Ok(())
    }
}

/// What a [`ScriptedMessageHandler`] does when called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    /// Count indications like the real handler.
    Succeed,
    /// Return `HandlerError::Failed` without touching counters.
    Fail,
    /// Panic inside the handler.
    Panic,
}

/// Message handler with scripted behavior and call counters.
#[derive(Debug)]
pub struct ScriptedMessageHandler {
    stats: CounterGroup,
    script: Script,
    indication_calls: AtomicUsize,
    response_calls: AtomicUsize,
}

impl ScriptedMessageHandler {
    pub fn new(stats: CounterGroup) -> Self {
        Self::scripted(stats, Script::Succeed)
    }

    pub fn scripted(stats: CounterGroup, script: Script) -> Self {
        Self {
            stats,
            script,
            indication_calls: AtomicUsize::new(0),
            response_calls: AtomicUsize::new(0),
        }
    }

    pub fn indication_calls(&self) -> usize {
        self.indication_calls.load(Ordering::SeqCst)
    }

    pub fn response_calls(&self) -> usize {
        self.response_calls.load(Ordering::SeqCst)
    }

    #[allow(clippy::panic)]
    fn run_script(&self, msg: &RicMessage) -> Result<(), HandlerError> {
        match self.script {
            Script::Succeed => Ok(()),
            Script::Fail => Err(HandlerError::Failed(format!("scripted failure for {}", msg.meid))),
            Script::Panic => panic!("scripted handler panic for {}", msg.meid),
        }
    }
}

impl MessageHandler for ScriptedMessageHandler {
    fn handle_indication(&self, msg: &RicMessage) -> Result<(), HandlerError> {
        self.indication_calls.fetch_add(1, Ordering::SeqCst);
        self.run_script(msg)?;
        self.stats.inc(RIC_INDICATION_RX);
        Ok(())
    }

    fn handle_subscription_response(&self, msg: &RicMessage) -> Result<(), HandlerError> {
        self.response_calls.fetch_add(1, Ordering::SeqCst);
        self.run_script(msg)
    }

    fn stats(&self) -> CounterGroup {
        self.stats.clone()
    }
}
