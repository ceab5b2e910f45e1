//! Cross-crate integration scenarios.

pub mod dispatch_flow;
pub mod log_capture;
pub mod subscription_flow;
pub mod xapp_lifecycle;
