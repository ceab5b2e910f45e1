//! # Adapters
//!
//! Concrete implementations of the cores' driven ports.
//!
//! - `subscription_manager` - `SubscriptionClient` over REST
//! - `alarm_manager` - `AlarmClient` over REST
//! - `static_directory` - `PeerDirectory` from configuration
//! - `buffer_pool` - `BufferReleaser` for the in-process delivery channel

pub mod alarm_manager;
pub mod buffer_pool;
pub mod static_directory;
pub mod subscription_manager;

pub use alarm_manager::{AlarmManagerClient, AlarmMessage};
pub use buffer_pool::HeapBufferPool;
pub use static_directory::StaticPeerDirectory;
pub use subscription_manager::{SubscriptionManagerClient, SubscriptionResponse};
