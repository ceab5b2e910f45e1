//! Domain errors for neighbor discovery and subscription.

use thiserror::Error;

/// A peer-kind listing call failed.
///
/// Policy: the orchestrator degrades that kind to an empty list and continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    #[error("peer directory unavailable: {0}")]
    Unavailable(String),

    #[error("peer directory lookup failed: {0}")]
    Lookup(String),
}

/// The subscription manager did not accept a request.
///
/// Policy: raise an alarm for the peer and continue with the next one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionSubmitError {
    #[error("subscription rejected with status {status}: {reason}")]
    Rejected { status: u16, reason: String },

    #[error("subscription transport error: {0}")]
    Transport(String),

    #[error("malformed subscription response: {0}")]
    InvalidResponse(String),
}

/// The alarm channel itself failed.
///
/// Policy: log only; there is no further escalation path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlarmRaiseError {
    #[error("alarm rejected with status {status}: {reason}")]
    Rejected { status: u16, reason: String },

    #[error("alarm transport error: {0}")]
    Transport(String),
}

/// Invalid subscription parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscriptionConfigError {
    #[error("client endpoint host is empty")]
    EmptyHost,

    #[error("client endpoint {0} must be non-zero")]
    ZeroPort(&'static str),

    #[error("at least one action must be configured")]
    NoActions,

    #[error("concurrent submission needs max_in_flight > 0")]
    ZeroConcurrency,
}
