//! # Driven Ports (Outbound SPI)
//!
//! These are the capabilities this subsystem **requires** from the hosting
//! framework. Timeouts and cancellation of the remote calls are the
//! implementations' responsibility.

use async_trait::async_trait;

use crate::domain::{
    Alarm, AlarmRaiseError, DiscoveryError, PeerIdentity, SubscriptionId, SubscriptionRequest,
    SubscriptionSubmitError,
};

/// Topology registry listing the RAN nodes known to the deployment.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct RnibDirectory { reader: RnibReader }
///
/// #[async_trait]
/// impl PeerDirectory for RnibDirectory {
///     async fn list_enbs(&self) -> Result<Vec<PeerIdentity>, DiscoveryError> {
///         self.reader.enb_ids().await.map_err(|e| DiscoveryError::Lookup(e.to_string()))
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait PeerDirectory: Send + Sync {
    /// List eNB identities, in registry order.
    async fn list_enbs(&self) -> Result<Vec<PeerIdentity>, DiscoveryError>;

    /// List gNB identities, in registry order.
    async fn list_gnbs(&self) -> Result<Vec<PeerIdentity>, DiscoveryError>;
}

/// Subscription manager client.
#[async_trait]
pub trait SubscriptionClient: Send + Sync {
    /// Submit one subscription request.
    ///
    /// # Returns
    ///
    /// The subscription id assigned by the subscription manager.
    async fn subscribe(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionId, SubscriptionSubmitError>;
}

/// Fault management alarm channel.
#[async_trait]
pub trait AlarmClient: Send + Sync {
    async fn raise(&self, alarm: &Alarm) -> Result<(), AlarmRaiseError>;
}
