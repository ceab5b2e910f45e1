//! Scope-bound buffer ownership.

use tracing::error;

use super::SUBSYSTEM;
use crate::domain::BufferHandle;
use crate::ports::BufferReleaser;

/// Releases the wrapped buffer when dropped.
///
/// Drop also runs while unwinding, so a buffer moved into a guard is released
/// exactly once.
pub struct BufferGuard<'a> {
    buffer: Option<BufferHandle>,
    releaser: &'a dyn BufferReleaser,
}

impl<'a> BufferGuard<'a> {
    /// Guard `buffer`. A message delivered without a buffer yields an empty guard.
    pub fn new(buffer: Option<BufferHandle>, releaser: &'a dyn BufferReleaser) -> Self {
        Self { buffer, releaser }
    }

    pub fn is_armed(&self) -> bool {
        self.buffer.is_some()
    }
}

impl Drop for BufferGuard<'_> {
    fn drop(&mut self) {
        let Some(buffer) = self.buffer.take() else {
            return;
        };
        let id = buffer.id();
        if let Err(e) = self.releaser.release(buffer) {
            error!(subsystem = SUBSYSTEM, buffer = id, error = %e, "Failed to release message buffer");
        }
    }
}
