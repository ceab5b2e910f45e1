//! # Neighbor Discovery & Subscription Orchestrator
//!
//! Discovers the RAN peers (eNBs and gNBs) currently connected to the RIC
//! and submits one KPM subscription request per peer.
//!
//! ## Behavior
//!
//! - eNBs are listed first, then gNBs; a failing listing degrades that kind
//!   to an empty list and the pass continues.
//! - Each peer gets exactly one subscription attempt per pass.
//! - A failed attempt raises a `CRITICAL` alarm (code 8086,
//!   `subscriptionFailed`) naming the peer, and the pass moves on.
//! - The pass returns a [`SubscriptionReport`] with one outcome per peer, in
//!   submission order.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** peer identities, the request descriptor, alarms, outcomes
//! - **Ports Layer:** `PeerDirectory`, `SubscriptionClient`, `AlarmClient` (driven)
//!   and `NbSubscriptionApi` (driving)
//! - **Service Layer:** [`NbSubscriptionService`] wiring domain to ports
//!
//! Concrete REST adapters live in `kpm-runtime`. In-memory doubles are
//! available behind the `test-utils` feature.

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod domain;
pub mod ports;
pub mod service;

/// In-memory port doubles.
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Domain types
pub use domain::{
    ActionSpec, ActionType, Alarm, AlarmRaiseError, AlarmSeverity, AlarmSpec, AlarmStatus,
    ClientEndpoint, DiscoveryError, DiscoverySnapshot, PeerIdentity, PeerKind, SubmissionMode,
    SubscriptionConfig, SubscriptionConfigError, SubscriptionDetail, SubscriptionId,
    SubscriptionOutcome, SubscriptionReport, SubscriptionRequest, SubscriptionSubmitError,
    SubsequentAction, SubsequentActionType, TimeToWait, SUBSCRIPTION_FAILED_ALARM_CODE,
    SUBSCRIPTION_FAILED_REASON,
};

// Port traits
pub use ports::{AlarmClient, NbSubscriptionApi, PeerDirectory, SubscriptionClient};

// Service
pub use service::NbSubscriptionService;
