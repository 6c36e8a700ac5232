//! Durable storage error types.

use thiserror::Error;

/// Key-value storage error variants.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read storage: {0}")]
    ReadFailed(String),

    #[error("failed to write storage: {0}")]
    WriteFailed(String),

    #[error("stored value is corrupt: {0}")]
    Corrupt(String),
}
