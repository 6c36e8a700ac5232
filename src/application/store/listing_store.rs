//! In-memory listing collection and favorite set.

use tracing::{debug, info, warn};

use super::FavoritesRepository;
use crate::domain::entities::{FavoriteSet, Listing, ListingId};
use crate::domain::query::ListingQuery;

/// Owner of the loaded listings and the favorite set.
///
/// Listings are populated once per session and read-only afterwards. The
/// favorite set is the only mutable state and every change to it is written
/// through the repository before the call returns.
pub struct ListingStore {
    listings: Vec<Listing>,
    favorites: FavoriteSet,
    repository: FavoritesRepository,
}

impl ListingStore {
    /// Creates an empty store and loads persisted favorites.
    #[must_use]
    pub fn new(repository: FavoritesRepository) -> Self {
        let favorites = repository.load();
        info!(favorites = favorites.len(), "Listing store initialized");

        Self {
            listings: Vec::new(),
            favorites,
            repository,
        }
    }

    /// Replaces the listing collection.
    pub fn populate(&mut self, listings: Vec<Listing>) {
        debug!(count = listings.len(), "Populating listing store");
        self.listings = listings;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Finds the first listing with the given id.
    #[must_use]
    pub fn find(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Runs a filter and sort query.
    #[must_use]
    pub fn query(&self, query: &ListingQuery) -> Vec<&Listing> {
        let mut results: Vec<&Listing> = self
            .listings
            .iter()
            .filter(|listing| query.matches(listing))
            .collect();
        query.sort.apply(&mut results);
        results
    }

    /// Returns favorited listings in dataset order.
    #[must_use]
    pub fn favorite_listings(&self) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| self.favorites.contains(listing.id))
            .collect()
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, id: ListingId) -> bool {
        self.favorites.contains(id)
    }

    /// Flips the favorite state of `id`, persists it, and returns whether the
    /// id is now a favorite.
    ///
    /// The id does not need to exist in the collection. A failed write is
    /// logged; the in-memory state keeps the change.
    pub fn toggle_favorite(&mut self, id: ListingId) -> bool {
        let is_favorite = self.favorites.toggle(id);
        debug!(id = %id, is_favorite, "Toggled favorite");

        if let Err(e) = self.repository.save(&self.favorites) {
            warn!(error = %e, id = %id, "Failed to persist favorites");
        }

        is_favorite
    }

    /// Distinct transaction types in first-seen order.
    #[must_use]
    pub fn transaction_types(&self) -> Vec<String> {
        self.distinct(|listing| listing.transaction_type.as_deref())
    }

    /// Distinct property types in first-seen order.
    #[must_use]
    pub fn property_types(&self) -> Vec<String> {
        self.distinct(|listing| listing.property_type.as_deref())
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Listing) -> Option<&'a str>) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for value in self.listings.iter().filter_map(field) {
            if !values.iter().any(|existing| existing == value) {
                values.push(value.to_string());
            }
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::services::parse_listings;
    use crate::application::store::FAVORITES_KEY;
    use crate::domain::ports::mocks::MemoryKeyValueStore;
    use crate::domain::query::{PriceRange, SortMode};

    fn ids(listings: &[&Listing]) -> Vec<String> {
        listings.iter().map(|listing| listing.id.to_string()).collect()
    }

    fn store_with(kv: Arc<MemoryKeyValueStore>, listings: Vec<Listing>) -> ListingStore {
        let mut store = ListingStore::new(FavoritesRepository::new(kv));
        store.populate(listings);
        store
    }

    fn sample_listings() -> Vec<Listing> {
        vec![
            Listing::new(1)
                .with_title("Casa térrea")
                .with_location("Olinda")
                .with_price(100.0)
                .with_transaction_type("Venda")
                .with_property_type("Casa"),
            Listing::new(2)
                .with_title("Apartamento")
                .with_location("Boa Viagem")
                .with_price(200.0)
                .with_transaction_type("Aluguel")
                .with_property_type("Apartamento"),
            Listing::new(3)
                .with_title("Cobertura")
                .with_location("Casa Forte")
                .with_price(300.0)
                .with_transaction_type("Venda")
                .with_property_type("Apartamento"),
        ]
    }

    #[test]
    fn test_price_range_query() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()), sample_listings());
        let query = ListingQuery::new().with_price(PriceRange::new(Some(150.0), Some(250.0)));

        assert_eq!(ids(&store.query(&query)), ["2"]);
    }

    #[test]
    fn test_default_query_returns_everything_in_order() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()), sample_listings());

        assert_eq!(ids(&store.query(&ListingQuery::default())), ["1", "2", "3"]);
    }

    #[test]
    fn test_search_matches_title_or_location() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()), sample_listings());
        let query = ListingQuery::new().with_search("CASA");

        assert_eq!(ids(&store.query(&query)), ["1", "3"]);
    }

    #[test]
    fn test_combined_filters_then_sort() {
        let store = store_with(Arc::new(MemoryKeyValueStore::new()), sample_listings());
        let query = ListingQuery::new()
            .with_transaction_type("Venda")
            .with_sort(SortMode::PriceDescending);

        assert_eq!(ids(&store.query(&query)), ["3", "1"]);

        let query = ListingQuery::new()
            .with_property_type("Apartamento")
            .with_sort(SortMode::PriceAscending);

        assert_eq!(ids(&store.query(&query)), ["2", "3"]);
    }

    #[test]
    fn test_descending_sort_orders_by_price() {
        let mut listings = sample_listings();
        listings.swap(0, 1);
        let store = store_with(Arc::new(MemoryKeyValueStore::new()), listings);
        let query = ListingQuery::new().with_sort(SortMode::PriceDescending);

        assert_eq!(ids(&store.query(&query)), ["3", "2", "1"]);
    }

    #[test]
    fn test_toggle_favorite_persists_each_change() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let mut store = store_with(kv.clone(), Vec::new());
        let id = ListingId::from(5);

        assert!(store.toggle_favorite(id));
        let reloaded = FavoritesRepository::new(kv.clone()).load();
        assert_eq!(reloaded, FavoriteSet::from_ids([id]));

        assert!(!store.toggle_favorite(id));
        assert!(FavoritesRepository::new(kv.clone()).load().is_empty());
        assert_eq!(kv.raw(FAVORITES_KEY).as_deref(), Some("[]"));
        assert_eq!(kv.writes(), 2);
    }

    #[test]
    fn test_favorites_are_loaded_at_startup() {
        let kv = Arc::new(MemoryKeyValueStore::with_entry(FAVORITES_KEY, "[2, 99]"));
        let store = store_with(kv, sample_listings());

        assert!(store.is_favorite(ListingId::from(2)));
        assert!(store.is_favorite(ListingId::from(99)));
        assert_eq!(ids(&store.favorite_listings()), ["2"]);
    }

    #[test]
    fn test_infinite_id_does_not_drop_other_favorites_on_reload() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        let mut store = store_with(kv.clone(), parse_listings("id,title\n1,Casa\nInfinity,Apto"));
        let all_ids: Vec<ListingId> = store
            .query(&ListingQuery::default())
            .iter()
            .map(|listing| listing.id)
            .collect();
        for id in all_ids {
            store.toggle_favorite(id);
        }

        assert_eq!(kv.raw(FAVORITES_KEY).as_deref(), Some("[1,null]"));
        let reloaded = store_with(kv, parse_listings("id,title\n1,Casa\nInfinity,Apto"));
        assert_eq!(ids(&reloaded.favorite_listings()), ["1"]);
    }

    #[test]
    fn test_favorite_listings_keep_collection_order() {
        let mut store = store_with(Arc::new(MemoryKeyValueStore::new()), sample_listings());

        store.toggle_favorite(ListingId::from(3));
        store.toggle_favorite(ListingId::from(1));

        assert_eq!(ids(&store.favorite_listings()), ["1", "3"]);
    }

    #[test]
    fn test_duplicate_ids_share_favorite_state() {
        let listings = vec![
            Listing::new(1).with_title("a"),
            Listing::new(1).with_title("b"),
        ];
        let mut store = store_with(Arc::new(MemoryKeyValueStore::new()), listings);

        store.toggle_favorite(ListingId::from(1));

        assert_eq!(store.favorite_listings().len(), 2);
        assert_eq!(store.find(ListingId::from(1)).unwrap().title.as_deref(), Some("a"));
    }

    #[test]
    fn test_toggle_unknown_id_succeeds() {
        let mut store = store_with(Arc::new(MemoryKeyValueStore::new()), sample_listings());

        assert!(store.toggle_favorite(ListingId::from(42)));
        assert!(store.favorite_listings().is_empty());
        assert_eq!(store.favorites().len(), 1);
    }

    #[test]
    fn test_failed_write_keeps_in_memory_state() {
        let kv = Arc::new(MemoryKeyValueStore::new());
        kv.set_fail_writes(true);
        let mut store = store_with(kv, sample_listings());

        assert!(store.toggle_favorite(ListingId::from(1)));
        assert!(store.is_favorite(ListingId::from(1)));
    }

    #[test]
    fn test_distinct_categories() {
        let mut listings = sample_listings();
        listings.push(Listing::new(4));
        let store = store_with(Arc::new(MemoryKeyValueStore::new()), listings);

        assert_eq!(store.transaction_types(), ["Venda", "Aluguel"]);
        assert_eq!(store.property_types(), ["Casa", "Apartamento"]);
    }
}
