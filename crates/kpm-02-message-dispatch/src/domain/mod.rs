//! Domain Layer - message model and classification, no I/O
//!
//! This module contains:
//! - The inbound RIC message and its buffer handle
//! - The message type catalog (numeric tag <-> symbolic name)
//! - Dispatch outcomes and the error taxonomy

pub mod catalog;
pub mod errors;
pub mod message;
pub mod outcome;

pub use catalog::*;
pub use errors::*;
pub use message::*;
pub use outcome::*;
