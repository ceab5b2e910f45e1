//! # Driving Ports (Inbound API)
//!
//! The API this subsystem exposes to the xApp runtime.

use async_trait::async_trait;

use crate::domain::{DiscoverySnapshot, SubscriptionReport};

/// Neighbor discovery and subscription orchestration.
///
/// # Example
///
/// ```rust,ignore
/// use kpm_01_nb_subscription::ports::NbSubscriptionApi;
///
/// async fn on_ready<T: NbSubscriptionApi>(api: &T) {
///     let report = api.subscribe_to_all().await;
///     println!("{} of {} peers subscribed", report.success_count(), report.outcomes.len());
/// }
/// ```
#[async_trait]
pub trait NbSubscriptionApi: Send + Sync {
    /// List eNBs then gNBs.
    ///
    /// A failed listing for one kind degrades that kind to empty; it never
    /// prevents the other kind from being listed.
    async fn discover_peers(&self) -> DiscoverySnapshot;

    /// Discover peers and submit exactly one subscription per peer.
    ///
    /// Failures are handled per peer (alarm raised, next peer attempted) and
    /// reported in the returned outcomes. No retries are made within a pass.
    async fn subscribe_to_all(&self) -> SubscriptionReport;
}
