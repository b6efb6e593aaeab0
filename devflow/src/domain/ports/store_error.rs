//! Error taxonomy shared by every document-store repository port.

/// Errors surfaced by document-store adapters.
///
/// Adapters distinguish only between the store being unreachable and an
/// individual operation failing; services map the former to
/// `ServiceUnavailable` and the latter to `InternalError`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unreachable: {message}")]
    Unavailable {
        /// Adapter-specific description of the connectivity failure.
        message: String,
    },
    /// A find or mutation failed during execution.
    #[error("store operation failed: {message}")]
    Query {
        /// Adapter-specific description of the failed operation.
        message: String,
    },
}

impl StoreError {
    /// Construct an [`StoreError::Unavailable`] from any message type.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Construct a [`StoreError::Query`] from any message type.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
