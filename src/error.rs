//! Error types for queue operations.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur when creating elements or growing a queue.
///
/// Removal and structural operations never fail with an error: operating on
/// an empty queue is reported through a `None` / `false` / `0` return
/// instead, so the container stays defensively usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Heap memory could not be obtained for an element slot or its text.
    ///
    /// Insertions reserve all required storage before touching the ring, so
    /// a failed insert leaves the queue exactly as it was.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

impl QueueError {
    /// Returns `true` if retrying the operation later could succeed
    /// (e.g. after the caller frees memory elsewhere).
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Alloc(_))
    }
}
