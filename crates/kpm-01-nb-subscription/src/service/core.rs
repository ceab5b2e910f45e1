use std::sync::Arc;

use crate::domain::{SubscriptionConfig, SubscriptionConfigError};
use crate::ports::{AlarmClient, PeerDirectory, SubscriptionClient};

pub(crate) const SUBSYSTEM: &str = "nb-subscription";

/// Neighbor subscription service implementing the driving port.
///
/// Holds the immutable subscription parameters and the three framework
/// capabilities it orchestrates. No per-run state is kept between passes.
///
/// # Example
///
/// ```rust,ignore
/// use kpm_01_nb_subscription::{NbSubscriptionApi, NbSubscriptionService, SubscriptionConfig};
///
/// let service = NbSubscriptionService::new(
///     SubscriptionConfig::default(),
///     Arc::new(directory),
///     Arc::new(submgr_client),
///     Arc::new(alarm_client),
/// )?;
///
/// let report = service.subscribe_to_all().await;
/// ```
pub struct NbSubscriptionService {
    pub(crate) config: SubscriptionConfig,
    pub(crate) directory: Arc<dyn PeerDirectory>,
    pub(crate) subscriptions: Arc<dyn SubscriptionClient>,
    pub(crate) alarms: Arc<dyn AlarmClient>,
}

impl NbSubscriptionService {
    /// Create a new service.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant of `config`.
    pub fn new(
        config: SubscriptionConfig,
        directory: Arc<dyn PeerDirectory>,
        subscriptions: Arc<dyn SubscriptionClient>,
        alarms: Arc<dyn AlarmClient>,
    ) -> Result<Self, SubscriptionConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            directory,
            subscriptions,
            alarms,
        })
    }

    pub fn config(&self) -> &SubscriptionConfig {
        &self.config
    }
}
