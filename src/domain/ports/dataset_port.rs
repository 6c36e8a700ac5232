//! Dataset source port definition.

use async_trait::async_trait;

use crate::domain::errors::LoadError;

/// Port for fetching the raw listing dataset.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetches the complete dataset as delimited text.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human readable origin, used in logs and the status bar.
    fn describe(&self) -> String;
}
