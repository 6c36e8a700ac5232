//! Durable key-value store port definition.

use crate::domain::errors::StorageError;

/// Port for a small durable string store.
///
/// Calls are synchronous: every write completes before the caller continues.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory key-value store for testing.
    #[derive(Default)]
    pub struct MemoryKeyValueStore {
        values: Mutex<HashMap<String, String>>,
        writes: AtomicUsize,
        fail_writes: AtomicBool,
    }

    impl MemoryKeyValueStore {
        /// Creates empty store.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates store with a pre-existing entry.
        pub fn with_entry(key: &str, value: &str) -> Self {
            let store = Self::new();
            store
                .values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            store
        }

        /// Makes every subsequent `set` fail.
        pub fn set_fail_writes(&self, fail: bool) {
            self.fail_writes.store(fail, Ordering::SeqCst);
        }

        /// Returns the number of successful writes.
        pub fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        /// Returns the raw stored value.
        pub fn raw(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }
    }

    impl KeyValueStore for MemoryKeyValueStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.raw(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::WriteFailed("mock write failure".to_string()));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}
