//! In-memory doubles for the driven ports.
//!
//! Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust,ignore
//! use kpm_01_nb_subscription::test_utils::InMemoryPeerDirectory;
//!
//! let directory = InMemoryPeerDirectory::new()
//!     .with_enbs(["enb1"])
//!     .with_gnbs(["gnb1", "gnb2"]);
//! assert_eq!(directory.list_calls(), 0);
//! ```

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use crate::domain::{
    Alarm, AlarmRaiseError, DiscoveryError, PeerIdentity, SubscriptionId, SubscriptionRequest,
    SubscriptionSubmitError,
};
use crate::ports::{AlarmClient, PeerDirectory, SubscriptionClient};

/// Peer directory serving fixed lists, or a fixed error per kind.
#[derive(Debug)]
pub struct InMemoryPeerDirectory {
    enbs: Result<Vec<PeerIdentity>, DiscoveryError>,
    gnbs: Result<Vec<PeerIdentity>, DiscoveryError>,
    list_calls: AtomicUsize,
}

impl InMemoryPeerDirectory {
    /// Directory with no peers of either kind.
    pub fn new() -> Self {
        Self {
            enbs: Ok(Vec::new()),
            gnbs: Ok(Vec::new()),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_enbs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enbs = Ok(names.into_iter().map(PeerIdentity::enb).collect());
        self
    }

    pub fn with_gnbs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gnbs = Ok(names.into_iter().map(PeerIdentity::gnb).collect());
        self
    }

    /// Make every eNB listing fail with `error`.
    pub fn failing_enbs(mut self, error: DiscoveryError) -> Self {
        self.enbs = Err(error);
        self
    }

    /// Make every gNB listing fail with `error`.
    pub fn failing_gnbs(mut self, error: DiscoveryError) -> Self {
        self.gnbs = Err(error);
        self
    }

    /// Number of listing calls made, both kinds combined.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryPeerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PeerDirectory for InMemoryPeerDirectory {
    async fn list_enbs(&self) -> Result<Vec<PeerIdentity>, DiscoveryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.enbs.clone()
    }

    async fn list_gnbs(&self) -> Result<Vec<PeerIdentity>, DiscoveryError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.gnbs.clone()
    }
}

/// Subscription client that records every request.
///
/// Succeeds with ids `sub-1`, `sub-2`, ... unless the request's `Meid` was
/// registered with [`RecordingSubscriptionClient::fail_for`].
#[derive(Debug, Default)]
pub struct RecordingSubscriptionClient {
    requests: Mutex<Vec<SubscriptionRequest>>,
    failing_meids: Mutex<HashSet<String>>,
    next_id: AtomicU64,
}

impl RecordingSubscriptionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every request whose `Meid` is `meid`.
    pub fn fail_for(self, meid: impl Into<String>) -> Self {
        self.failing_meids.lock().insert(meid.into());
        self
    }

    pub fn requests(&self) -> Vec<SubscriptionRequest> {
        self.requests.lock().clone()
    }

    /// `Meid` of every submitted request, in submission order.
    pub fn submitted_meids(&self) -> Vec<String> {
        self.requests.lock().iter().map(|r| r.meid.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl SubscriptionClient for RecordingSubscriptionClient {
    async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionId, SubscriptionSubmitError> {
        self.requests.lock().push(request.clone());

        if self.failing_meids.lock().contains(&request.meid) {
            return Err(SubscriptionSubmitError::Rejected {
                status: 503,
                reason: format!("no E2 connection to {}", request.meid),
            });
        }

        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SubscriptionId::new(format!("sub-{n}")))
    }
}

/// Alarm client that records every alarm, optionally failing each raise.
#[derive(Debug, Default)]
pub struct RecordingAlarmClient {
    alarms: Mutex<Vec<Alarm>>,
    failing: AtomicBool,
}

impl RecordingAlarmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record alarms but report every raise as failed.
    pub fn failing() -> Self {
        Self {
            alarms: Mutex::new(Vec::new()),
            failing: AtomicBool::new(true),
        }
    }

    pub fn alarms(&self) -> Vec<Alarm> {
        self.alarms.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.alarms.lock().len()
    }
}

#[async_trait]
impl AlarmClient for RecordingAlarmClient {
    async fn raise(&self, alarm: &Alarm) -> Result<(), AlarmRaiseError> {
        self.alarms.lock().push(alarm.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(AlarmRaiseError::Transport(
                "alarm manager unreachable".to_string(),
            ));
        }
        Ok(())
    }
}
