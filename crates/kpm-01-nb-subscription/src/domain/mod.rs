//! Domain Layer - Pure subscription logic with no I/O
//!
//! This module contains:
//! - RAN peer identities (eNB / gNB)
//! - The subscription request descriptor and its immutable parameters
//! - Alarms raised for failed subscriptions
//! - Per-peer outcomes and the pass report
//! - Error taxonomy for discovery, submission and alarm raising

pub mod alarm;
pub mod config;
pub mod entities;
pub mod errors;
pub mod outcome;
pub mod subscription;

pub use alarm::*;
pub use config::*;
pub use entities::*;
pub use errors::*;
pub use outcome::*;
pub use subscription::*;
