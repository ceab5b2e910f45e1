//! # Neighbor Subscription Service
//!
//! High-level service implementing the `NbSubscriptionApi` port.
//!
//! One pass lists eNBs and gNBs from the peer directory, then submits one
//! subscription per peer. A failed submission raises a critical alarm for
//! that peer and the pass moves on to the next peer; the returned report
//! keeps one outcome per peer in submission order.

// Semantic submodules
mod api;
mod core;
mod discovery;
mod submission;

// Re-export public API
pub use self::core::NbSubscriptionService;
