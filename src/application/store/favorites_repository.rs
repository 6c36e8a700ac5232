//! Favorite set persistence.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::FavoriteSet;
use crate::domain::errors::StorageError;
use crate::domain::ports::KeyValueStore;

/// Storage key holding the favorite id list.
pub const FAVORITES_KEY: &str = "alphaprime_favorites";

/// Loads and saves the favorite set under a fixed key.
#[derive(Clone)]
pub struct FavoritesRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl FavoritesRepository {
    /// Creates repository using the default key.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    /// Creates repository using a custom key.
    #[must_use]
    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Loads the favorite set.
    ///
    /// A missing, unreadable or corrupt value yields an empty set.
    #[must_use]
    pub fn load(&self) -> FavoriteSet {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored favorites");
                return FavoriteSet::new();
            }
            Err(e) => {
                warn!(error = %e, "Failed to read favorites, starting empty");
                return FavoriteSet::new();
            }
        };

        match serde_json::from_str::<Option<FavoriteSet>>(&raw) {
            Ok(set) => {
                let set = set.unwrap_or_default();
                debug!(count = set.len(), "Loaded favorites");
                set
            }
            Err(e) => {
                warn!(error = %e, "Stored favorites are corrupt, starting empty");
                FavoriteSet::new()
            }
        }
    }

    /// Writes the favorite set synchronously.
    ///
    /// # Errors
    /// Returns error if serialization or the underlying write fails.
    pub fn save(&self, favorites: &FavoriteSet) -> Result<(), StorageError> {
        let raw = serde_json::to_string(favorites)
            .map_err(|e| StorageError::WriteFailed(format!("failed to serialize favorites: {e}")))?;
        self.store.set(&self.key, &raw)?;
        debug!(count = favorites.len(), "Saved favorites");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ListingId;
    use crate::domain::ports::mocks::MemoryKeyValueStore;

    #[test]
    fn test_missing_value_loads_empty() {
        let repository = FavoritesRepository::new(Arc::new(MemoryKeyValueStore::new()));
        assert!(repository.load().is_empty());
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        for raw in ["not json", "{\"a\":1}", "[\"x\"]", ""] {
            let store = Arc::new(MemoryKeyValueStore::with_entry(FAVORITES_KEY, raw));
            assert!(FavoritesRepository::new(store).load().is_empty(), "{raw}");
        }
    }

    #[test]
    fn test_null_value_loads_empty() {
        let store = Arc::new(MemoryKeyValueStore::with_entry(FAVORITES_KEY, "null"));
        assert!(FavoritesRepository::new(store).load().is_empty());
    }

    #[test]
    fn test_save_then_load_with_fresh_repository() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let favorites = FavoriteSet::from_ids([3, 1].map(ListingId::from));

        FavoritesRepository::new(store.clone()).save(&favorites).unwrap();

        assert_eq!(store.raw(FAVORITES_KEY).as_deref(), Some("[3,1]"));
        assert_eq!(FavoritesRepository::new(store).load(), favorites);
    }

    #[test]
    fn test_custom_key() {
        let store = Arc::new(MemoryKeyValueStore::new());
        let repository = FavoritesRepository::with_key(store.clone(), "other");

        repository.save(&FavoriteSet::from_ids([ListingId::from(9)])).unwrap();

        assert!(store.raw(FAVORITES_KEY).is_none());
        assert_eq!(store.raw("other").as_deref(), Some("[9]"));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store.set_fail_writes(true);

        let result = FavoritesRepository::new(store).save(&FavoriteSet::new());

        assert!(matches!(result, Err(StorageError::WriteFailed(_))));
    }
}
