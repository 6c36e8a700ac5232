//! Published spreadsheet HTTP source.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::errors::LoadError;
use crate::domain::ports::DatasetSource;

const USER_AGENT: &str = concat!("homedeck/", env!("CARGO_PKG_VERSION"));

/// Fetches the dataset with a single unauthenticated GET.
pub struct HttpDatasetSource {
    client: Client,
    url: String,
}

impl HttpDatasetSource {
    /// Creates source with the given request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        debug!(url = %self.url, "Requesting dataset");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach dataset host");
            if e.is_timeout() {
                LoadError::network("request timed out")
            } else if e.is_connect() {
                LoadError::network("failed to connect to dataset host")
            } else {
                LoadError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Dataset request rejected");
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            warn!(error = %e, "Failed to read dataset body");
            LoadError::network(format!("failed to read response body: {e}"))
        })?;

        debug!(bytes = body.len(), "Dataset received");
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_url() {
        let source =
            HttpDatasetSource::new("https://example.com/data.csv", Duration::from_secs(5)).unwrap();

        assert_eq!(source.describe(), "https://example.com/data.csv");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let source =
            HttpDatasetSource::new("http://127.0.0.1:9/listings.csv", Duration::from_secs(2))
                .unwrap();

        let result = source.fetch().await;

        assert!(matches!(result, Err(ref e) if e.is_network_error()));
    }
}
