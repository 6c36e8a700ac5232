//! Dataset loading error types.

use thiserror::Error;

/// Failure to obtain the listing dataset.
///
/// Every variant is terminal for the session: no partial dataset is shown
/// and the load is not retried.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum LoadError {
    #[error("network error while fetching listings: {message}")]
    Network { message: String },

    #[error("dataset request failed with HTTP {status}")]
    Status { status: u16 },

    #[error("failed to read dataset file {path}: {message}")]
    Io { path: String, message: String },

    #[error("dataset is empty")]
    Empty,

    #[error("unexpected error while loading listings: {message}")]
    Unexpected { message: String },
}

impl LoadError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates file read error.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether the failure happened on the network.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let error = LoadError::Status { status: 404 };
        assert_eq!(error.to_string(), "dataset request failed with HTTP 404");
        assert!(error.is_network_error());
    }

    #[test]
    fn test_io_is_not_network() {
        let error = LoadError::io("/tmp/listings.csv", "not found");
        assert!(!error.is_network_error());
        assert!(error.to_string().contains("/tmp/listings.csv"));
    }
}
