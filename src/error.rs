//! Error types
//!
//! None of these reach the page: the draft lifecycle logs them and carries on
//! without auto-save.

use thiserror::Error;

/// Failure of the underlying key-value store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Storage is disabled or access was refused (private mode, sandboxed frame)
    #[error("storage unavailable")]
    Unavailable,
    /// The write would exceed the origin's storage quota
    #[error("storage quota exceeded")]
    QuotaExceeded,
    /// Any other backend failure
    #[error("storage error: {0}")]
    Backend(String),
}

/// Failure while reading or writing a draft
#[derive(Debug, Error)]
pub enum DraftError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed draft: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("cannot serialize draft: {0}")]
    Serialize(#[source] serde_json::Error),
}
