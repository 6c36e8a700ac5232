//! Local CSV file source.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::errors::LoadError;
use crate::domain::ports::DatasetSource;

/// Reads the dataset from a file on disk.
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        debug!(path = %self.path.display(), "Reading dataset file");

        fs::read_to_string(&self.path).await.map_err(|e| {
            warn!(error = %e, path = %self.path.display(), "Failed to read dataset file");
            LoadError::io(self.path.display().to_string(), e.to_string())
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
