//! # KPM xApp Test Suite
//!
//! Cross-crate scenarios wiring the orchestrator, the dispatch core and the
//! runtime together through their ports.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── subscription_flow.rs   # discovery -> subscribe -> alarm
//!     ├── dispatch_flow.rs       # delivery -> dispatch -> counters / buffers
//!     └── xapp_lifecycle.rs      # config -> runtime -> ready -> delivery -> shutdown
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p kpm-tests
//! cargo test -p kpm-tests integration::dispatch_flow
//! ```

#![allow(dead_code)]

pub mod integration;
