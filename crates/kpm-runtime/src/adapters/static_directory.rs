//! Peer directory backed by the `[peers]` configuration section.

use async_trait::async_trait;
use kpm_01_nb_subscription::{DiscoveryError, PeerDirectory, PeerIdentity};

use crate::config::PeersSection;

/// Serves a fixed eNB / gNB inventory.
#[derive(Debug, Clone, Default)]
pub struct StaticPeerDirectory {
    enbs: Vec<String>,
    gnbs: Vec<String>,
}

impl StaticPeerDirectory {
    pub fn new(peers: &PeersSection) -> Self {
        Self {
            enbs: peers.enbs.clone(),
            gnbs: peers.gnbs.clone(),
        }
    }
}

#[async_trait]
impl PeerDirectory for StaticPeerDirectory {
    async fn list_enbs(&self) -> Result<Vec<PeerIdentity>, DiscoveryError> {
        Ok(self.enbs.iter().map(PeerIdentity::enb).collect())
    }

    async fn list_gnbs(&self) -> Result<Vec<PeerIdentity>, DiscoveryError> {
        Ok(self.gnbs.iter().map(PeerIdentity::gnb).collect())
    }
}
