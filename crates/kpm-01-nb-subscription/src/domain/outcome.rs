//! Results of a discovery and subscription pass.

use super::entities::{PeerIdentity, PeerKind, SubscriptionId};
use super::errors::{AlarmRaiseError, DiscoveryError, SubscriptionSubmitError};

/// Peers found by one discovery run.
///
/// `peers` holds every eNB in directory order followed by every gNB; a kind
/// whose listing failed contributes nothing and its error is kept alongside.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscoverySnapshot {
    pub peers: Vec<PeerIdentity>,
    pub enb_error: Option<DiscoveryError>,
    pub gnb_error: Option<DiscoveryError>,
}

impl DiscoverySnapshot {
    pub fn count(&self, kind: PeerKind) -> usize {
        self.peers.iter().filter(|p| p.kind() == kind).count()
    }

    pub fn is_degraded(&self) -> bool {
        self.enb_error.is_some() || self.gnb_error.is_some()
    }
}

/// What happened to the alarm for a failed subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmStatus {
    Raised,
    RaiseFailed(AlarmRaiseError),
}

/// Result of one peer's subscription attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Subscribed {
        peer: PeerIdentity,
        subscription_id: SubscriptionId,
    },
    Failed {
        peer: PeerIdentity,
        error: SubscriptionSubmitError,
        alarm: AlarmStatus,
    },
}

impl SubscriptionOutcome {
    pub fn peer(&self) -> &PeerIdentity {
        match self {
            Self::Subscribed { peer, .. } | Self::Failed { peer, .. } => peer,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Subscribed { .. })
    }

    pub fn subscription_id(&self) -> Option<&SubscriptionId> {
        match self {
            Self::Subscribed {
                subscription_id, ..
            } => Some(subscription_id),
            Self::Failed { .. } => None,
        }
    }
}

/// Per-peer outcomes of a `subscribe_to_all` pass, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscriptionReport {
    pub outcomes: Vec<SubscriptionOutcome>,
    pub enb_error: Option<DiscoveryError>,
    pub gnb_error: Option<DiscoveryError>,
}

impl SubscriptionReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &SubscriptionOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &SubscriptionOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn success_count(&self) -> usize {
        self.succeeded().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failed().count()
    }

    /// Every discovered peer subscribed and both listings succeeded.
    pub fn is_complete_success(&self) -> bool {
        self.enb_error.is_none() && self.gnb_error.is_none() && self.failure_count() == 0
    }
}
