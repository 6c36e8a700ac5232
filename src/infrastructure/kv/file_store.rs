//! JSON file backed key-value store.

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

type Entries = BTreeMap<String, String>;

/// Stores every key in one JSON object on disk.
///
/// Each write rewrites the whole file through a temporary file in the same
/// directory, so a crash never leaves a half-written store behind.
pub struct FileKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        if !parent.exists() {
            info!("Creating storage directory at {:?}", parent);
            fs::create_dir_all(parent).map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        temp_file
            .persist(&self.path)
            .map_err(|e| StorageError::WriteFailed(e.error.to_string()))?;

        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock();

        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock();

        // A corrupt file is replaced rather than blocking every later write.
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::Corrupt(_)) => Entries::new(),
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        self.write_entries(&entries)?;
        debug!(key, path = %self.path.display(), "Stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("storage.json"));

        assert_eq!(store.get("alphaprime_favorites").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_from_fresh_instance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        FileKeyValueStore::new(&path).set("favorites", "[1,2]").unwrap();
        let reopened = FileKeyValueStore::new(&path);

        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_set_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path().join("storage.json"));

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        assert_eq!(store.get("a").unwrap().as_deref(), Some("3"));
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_corrupt_file_is_reported_then_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();
        let store = FileKeyValueStore::new(&path);

        assert!(matches!(store.get("a"), Err(StorageError::Corrupt(_))));

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_concurrent_writers_keep_every_key() {
        let dir = tempdir().unwrap();
        let store = std::sync::Arc::new(FileKeyValueStore::new(dir.path().join("storage.json")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || store.set(&format!("key{i}"), &i.to_string()).unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for i in 0..8 {
            assert_eq!(store.get(&format!("key{i}")).unwrap(), Some(i.to_string()));
        }
    }
}
