//! # KPM xApp Runtime Library
//!
//! Exposes the runtime's modules for the `kpm-xapp` binary and for tests.
//!
//! - `config` - TOML + environment configuration
//! - `adapters` - REST clients, static peer directory, buffer pool
//! - `runtime` - lifecycle hooks and the delivery loop

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod adapters;
pub mod config;
pub mod runtime;

pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use runtime::{DeliveryStats, RuntimeError, XappRuntime};
