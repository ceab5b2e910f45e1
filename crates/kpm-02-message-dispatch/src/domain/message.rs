//! Inbound RIC messages and the framework buffers backing them.

use std::fmt;

/// Opaque reference to a framework-owned receive buffer.
///
/// Deliberately not `Clone`: a handle is moved into exactly one release call.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct BufferHandle(u64);

impl BufferHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BufferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "buf#{}", self.0)
    }
}

/// One message delivered by the RIC message router.
#[derive(Debug)]
pub struct RicMessage {
    /// Numeric message type
    pub mtype: i32,
    /// RAN name of the source peer
    pub meid: String,
    pub sub_id: i32,
    /// Transaction token
    pub xid: String,
    pub payload_len: usize,
    pub payload: Vec<u8>,
    /// Receive buffer; `None` once released.
    pub buffer: Option<BufferHandle>,
}

impl RicMessage {
    /// Message without a backing buffer. `payload_len` follows `payload`.
    pub fn new(
        mtype: i32,
        meid: impl Into<String>,
        sub_id: i32,
        xid: impl Into<String>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            mtype,
            meid: meid.into(),
            sub_id,
            xid: xid.into(),
            payload_len: payload.len(),
            payload,
            buffer: None,
        }
    }

    pub fn with_buffer(mut self, buffer: BufferHandle) -> Self {
        self.buffer = Some(buffer);
        self
    }
}
