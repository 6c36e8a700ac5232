//! Startup dataset loading use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::services::parse_listings;
use crate::domain::entities::Listing;
use crate::domain::errors::LoadError;
use crate::domain::ports::DatasetSource;

/// Fetches the dataset once and turns it into listings.
#[derive(Clone)]
pub struct LoadListingsUseCase {
    source: Arc<dyn DatasetSource>,
}

impl LoadListingsUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    /// Returns a description of the dataset origin.
    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Fetches and parses the dataset.
    ///
    /// Row-level defects never fail the load; only an unreachable or empty
    /// source does.
    ///
    /// # Errors
    /// Returns error if the source cannot be read or returns no content.
    pub async fn execute(&self) -> Result<Vec<Listing>, LoadError> {
        debug!(source = %self.source.describe(), "Fetching listings dataset");

        let text = self.source.fetch().await.map_err(|e| {
            warn!(error = %e, "Failed to fetch listings dataset");
            e
        })?;

        if text.trim().is_empty() {
            warn!("Listings dataset is empty");
            return Err(LoadError::Empty);
        }

        let listings = parse_listings(&text);
        info!(count = listings.len(), bytes = text.len(), "Listings loaded");

        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockDatasetSource;

    #[tokio::test]
    async fn test_parses_fetched_text() {
        let source = Arc::new(MockDatasetSource::with_text(
            "id,title,price\n1,Casa,100\n2,Apto,200\n",
        ));
        let use_case = LoadListingsUseCase::new(source.clone());

        let listings = use_case.execute().await.unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].title.as_deref(), Some("Apto"));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_body_is_an_error() {
        let use_case = LoadListingsUseCase::new(Arc::new(MockDatasetSource::with_text(" \n ")));

        let result = use_case.execute().await;

        assert!(matches!(result, Err(LoadError::Empty)));
    }

    #[tokio::test]
    async fn test_header_only_yields_no_listings() {
        let use_case = LoadListingsUseCase::new(Arc::new(MockDatasetSource::with_text("id,title")));

        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_is_propagated() {
        let use_case = LoadListingsUseCase::new(Arc::new(MockDatasetSource::failing(
            LoadError::Status { status: 503 },
        )));

        let result = use_case.execute().await;

        assert!(matches!(result, Err(LoadError::Status { status: 503 })));
    }
}
