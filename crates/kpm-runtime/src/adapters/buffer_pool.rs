//! In-process receive buffers for the delivery channel.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use kpm_02_message_dispatch::{BufferHandle, BufferReleaseError, BufferReleaser, RicMessage};
use parking_lot::Mutex;

/// Hands out buffer handles and takes them back exactly once.
///
/// Releasing a handle twice, or one the pool never issued, is an error.
#[derive(Debug, Default)]
pub struct HeapBufferPool {
    next_id: AtomicU64,
    outstanding: Mutex<HashSet<u64>>,
}

impl HeapBufferPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&self) -> BufferHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.outstanding.lock().insert(id);
        BufferHandle::new(id)
    }

    /// Attach a fresh buffer to `msg`.
    pub fn attach(&self, msg: RicMessage) -> RicMessage {
        msg.with_buffer(self.allocate())
    }

    /// Buffers handed out and not yet released.
    pub fn outstanding(&self) -> usize {
        self.outstanding.lock().len()
    }

    /// Total buffers ever handed out.
    pub fn allocated(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed)
    }
}

impl BufferReleaser for HeapBufferPool {
    fn release(&self, buffer: BufferHandle) -> Result<(), BufferReleaseError> {
        let id = buffer.id();
        if self.outstanding.lock().remove(&id) {
            return Ok(());
        }
        if id < self.allocated() {
            Err(BufferReleaseError::AlreadyReleased(id))
        } else {
            Err(BufferReleaseError::UnknownBuffer(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_release() {
        let pool = HeapBufferPool::new();
        let a = pool.allocate();
        let b = pool.allocate();
        assert_ne!(a.id(), b.id());
        assert_eq!(pool.outstanding(), 2);

        pool.release(a).unwrap();
        pool.release(b).unwrap();
        assert_eq!(pool.outstanding(), 0);
        assert_eq!(pool.allocated(), 2);
    }

    #[test]
    fn test_double_release_is_detected() {
        let pool = HeapBufferPool::new();
        let id = pool.allocate().id();
        pool.release(BufferHandle::new(id)).unwrap();

        assert_eq!(
            pool.release(BufferHandle::new(id)),
            Err(BufferReleaseError::AlreadyReleased(id))
        );
    }

    #[test]
    fn test_foreign_buffer_is_rejected() {
        let pool = HeapBufferPool::new();
        assert_eq!(
            pool.release(BufferHandle::new(42)),
            Err(BufferReleaseError::UnknownBuffer(42))
        );
    }

    #[test]
    fn test_attach_sets_buffer() {
        let pool = HeapBufferPool::new();
        let msg = pool.attach(RicMessage::new(12050, "gnb_1", 1, "x", Vec::new()));
        assert!(msg.buffer.is_some());
        assert_eq!(pool.outstanding(), 1);
    }
}
