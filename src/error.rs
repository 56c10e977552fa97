//! Error types returned by stores and storage backends

use thiserror::Error;

/// A caller-supplied input failed a precondition.
///
/// Rejecting an operation with this error leaves the collection unchanged and writes nothing
/// to storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The task text was empty (or whitespace only) after trimming
    #[error("task text must not be empty")]
    EmptyText,

    /// The event title was empty (or whitespace only) after trimming
    #[error("event title must not be empty")]
    EmptyTitle,

    /// The event date was missing or not a valid `YYYY-MM-DD` date
    #[error("invalid event date {0:?}")]
    InvalidDate(String),

    /// The event time was not a valid `HH:MM` time
    #[error("invalid event time {0:?}")]
    InvalidTime(String),
}

/// A storage backend failed to durably store a value.
///
/// Stores treat this as a best-effort failure: it is logged and swallowed, never propagated
/// to the caller of the operation that triggered the write.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file (or folder) for this key could not be written
    #[error("unable to write key {key:?}: {source}")]
    Write {
        key: String,
        source: std::io::Error,
    },

    /// A mocked failure, injected by a [`MockBehaviour`](crate::mock_behaviour::MockBehaviour)
    #[cfg(any(test, feature = "mock_storage_failures"))]
    #[error("mocked storage failure: {0}")]
    Mock(String),
}
