//! Favorite listing ids.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::ListingId;

/// Set of favorite listing ids.
///
/// Membership is what matters; the insertion order is kept only because the
/// set is persisted as a sequence. Ids are not checked against the loaded
/// listings, so stale entries from an older dataset survive untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<ListingId>,
}

impl FavoriteSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Builds a set from ids, dropping duplicates.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = ListingId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Returns whether the id is a member.
    #[must_use]
    pub fn contains(&self, id: ListingId) -> bool {
        self.ids.contains(&id)
    }

    /// Adds the id. Returns `false` if it was already present.
    pub fn insert(&mut self, id: ListingId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes the id. Returns `false` if it was not present.
    pub fn remove(&mut self, id: ListingId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        self.ids.len() != before
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, id: ListingId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// One element of the persisted list. Non-finite ids are written as `null`
/// by JSON, so unreadable elements are skipped instead of failing the list.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Id(ListingId),
    Unreadable(IgnoredAny),
}

impl<'de> Deserialize<'de> for FavoriteSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<StoredId>::deserialize(deserializer)?;
        Ok(Self::from_ids(entries.into_iter().filter_map(|entry| match entry {
            StoredId::Id(id) => Some(id),
            StoredId::Unreadable(_) => None,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut set = FavoriteSet::new();
        let id = ListingId::from(5);

        assert!(set.toggle(id));
        assert!(set.contains(id));
        assert!(!set.toggle(id));
        assert!(!set.contains(id));
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_ids_deduplicates() {
        let set = FavoriteSet::from_ids([1, 2, 1, 3].map(ListingId::from));

        assert_eq!(set.len(), 3);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_serializes_as_number_list() {
        let set = FavoriteSet::from_ids([5, 9].map(ListingId::from));
        assert_eq!(serde_json::to_string(&set).unwrap(), "[5,9]");
    }

    #[test]
    fn test_deserialize_drops_duplicates() {
        let set: FavoriteSet = serde_json::from_str("[4, 4, 2]").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(ListingId::from(4)));
        assert!(set.contains(ListingId::from(2)));
    }

    #[test]
    fn test_deserialize_skips_unreadable_entries() {
        let set: FavoriteSet = serde_json::from_str(r#"[1, null, "x", 7]"#).unwrap();

        assert_eq!(set, FavoriteSet::from_ids([1, 7].map(ListingId::from)));
    }

    #[test]
    fn test_insert_and_remove_report_changes() {
        let mut set = FavoriteSet::new();
        let id = ListingId::from(1);

        assert!(set.insert(id));
        assert!(!set.insert(id));
        assert!(set.remove(id));
        assert!(!set.remove(id));
    }
}
