//! Domain errors for message dispatch.

use thiserror::Error;

/// A message handler could not process a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("counter {0} is not registered")]
    MissingCounter(String),

    #[error("malformed {message_type} from {meid}: {reason}")]
    Malformed {
        message_type: String,
        meid: String,
        reason: String,
    },

    #[error("handler failed: {0}")]
    Failed(String),
}

/// Returned by `consume` for observability. The buffer is released regardless.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("handler error: {0}")]
    Handler(#[from] HandlerError),
}

/// Handing a buffer back to the framework failed.
///
/// Policy: logged at error level; the release attempt is never skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferReleaseError {
    #[error("buffer {0} was already released")]
    AlreadyReleased(u64),

    #[error("buffer {0} is not owned by this pool")]
    UnknownBuffer(u64),

    #[error("buffer release failed: {0}")]
    Framework(String),
}
