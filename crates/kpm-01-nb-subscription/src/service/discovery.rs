//! Peer listing with the degrade-to-empty policy.

use kpm_telemetry::log_event;
use tracing::{error, info};

use super::core::{NbSubscriptionService, SUBSYSTEM};
use crate::domain::{DiscoveryError, DiscoverySnapshot, PeerIdentity, PeerKind};

impl NbSubscriptionService {
    /// List eNBs then gNBs; a failing kind contributes no peers.
    pub(crate) async fn discover(&self) -> DiscoverySnapshot {
        let (enbs, enb_error) = self.list_kind(PeerKind::Enb).await;
        let (gnbs, gnb_error) = self.list_kind(PeerKind::Gnb).await;

        let mut peers = enbs;
        peers.extend(gnbs);

        log_event!(
            info,
            SUBSYSTEM,
            "Discovery complete",
            peers = peers.len(),
            degraded = enb_error.is_some() || gnb_error.is_some()
        );

        DiscoverySnapshot {
            peers,
            enb_error,
            gnb_error,
        }
    }

    async fn list_kind(&self, kind: PeerKind) -> (Vec<PeerIdentity>, Option<DiscoveryError>) {
        let listing = match kind {
            PeerKind::Enb => self.directory.list_enbs().await,
            PeerKind::Gnb => self.directory.list_gnbs().await,
        };

        match listing {
            Ok(peers) => {
                info!(subsystem = SUBSYSTEM, kind = %kind, "List of connected {}s:", kind);
                for (index, peer) in peers.iter().enumerate() {
                    info!(
                        subsystem = SUBSYSTEM,
                        kind = %kind,
                        "{}. {} id: {}",
                        index + 1,
                        kind,
                        peer.inventory_name()
                    );
                }
                (peers, None)
            }
            Err(e) => {
                error!(
                    subsystem = SUBSYSTEM,
                    kind = %kind,
                    error = %e,
                    "Peer listing failed, continuing without this kind"
                );
                (Vec::new(), Some(e))
            }
        }
    }
}
