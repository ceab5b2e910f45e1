//! Core domain entities: RAN peers and subscription identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of RAN node a peer is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeerKind {
    /// LTE base station
    Enb,
    /// 5G NR base station
    Gnb,
}

impl fmt::Display for PeerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enb => write!(f, "eNB"),
            Self::Gnb => write!(f, "gNB"),
        }
    }
}

/// One discoverable RAN node.
///
/// Produced by the peer directory on every listing and never cached between
/// orchestration runs. The inventory name is the subscription target (`Meid`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeerIdentity {
    inventory_name: String,
    kind: PeerKind,
}

impl PeerIdentity {
    pub fn new(inventory_name: impl Into<String>, kind: PeerKind) -> Self {
        Self {
            inventory_name: inventory_name.into(),
            kind,
        }
    }

    pub fn enb(inventory_name: impl Into<String>) -> Self {
        Self::new(inventory_name, PeerKind::Enb)
    }

    pub fn gnb(inventory_name: impl Into<String>) -> Self {
        Self::new(inventory_name, PeerKind::Gnb)
    }

    /// Unique name of the peer in the topology registry.
    pub fn inventory_name(&self) -> &str {
        &self.inventory_name
    }

    pub fn kind(&self) -> PeerKind {
        self.kind
    }
}

impl fmt::Display for PeerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.inventory_name, self.kind)
    }
}

/// Identifier returned by the subscription manager for an accepted subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
