use contracts::shared::{decode, encode, DecodeError, StoreKey, StoreRecord};
use std::sync::Arc;

use super::KvStore;

/// Bumped whenever a transient record changes shape
pub const STORE_SCHEMA_VERSION: u32 = 2;

/// Typed, failure-swallowing facade over a [`KvStore`].
///
/// Reads of absent or corrupted keys yield defaults, failed writes are
/// logged and dropped. Nothing here returns an error to a view.
#[derive(Clone)]
pub struct PersistedStore {
    backend: Arc<dyn KvStore>,
}

impl PersistedStore {
    pub fn new(backend: Arc<dyn KvStore>) -> Self {
        Self { backend }
    }

    pub fn get_raw(&self, key: StoreKey) -> Option<String> {
        match self.backend.get(key.as_str()) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("store read '{}' failed: {}", key, e);
                None
            }
        }
    }

    pub fn set_raw(&self, key: StoreKey, value: &str) {
        if let Err(e) = self.backend.set(key.as_str(), value) {
            log::warn!("store write '{}' dropped: {}", key, e);
        }
    }

    pub fn remove(&self, key: StoreKey) {
        if let Err(e) = self.backend.remove(key.as_str()) {
            log::warn!("store remove '{}' dropped: {}", key, e);
        }
    }

    /// Raw keys hold plain strings and are only reachable through `get_raw`
    pub fn try_load<T: StoreRecord>(&self, key: StoreKey) -> Result<T, DecodeError> {
        if key.is_raw() {
            return Err(DecodeError::Invalid(format!("'{}' is a plain string key", key)));
        }
        decode(self.get_raw(key).as_deref())
    }

    /// Absent, malformed and invalid records all read as `T::default()`
    pub fn load<T: StoreRecord + Default>(&self, key: StoreKey) -> T {
        self.load_opt(key).unwrap_or_default()
    }

    /// `None` when nothing usable is stored, e.g. a details page opened
    /// without a selection
    pub fn load_opt<T: StoreRecord>(&self, key: StoreKey) -> Option<T> {
        match self.try_load(key) {
            Ok(record) => Some(record),
            Err(DecodeError::Missing) => None,
            Err(e) => {
                log::warn!("discarding stored '{}': {}", key, e);
                None
            }
        }
    }

    /// Replaces whatever was stored under `key`; raw keys are refused
    pub fn save<T: StoreRecord>(&self, key: StoreKey, record: &T) {
        if key.is_raw() {
            log::warn!("refusing to write a JSON record under raw key '{}'", key);
            return;
        }
        match encode(record) {
            Some(raw) => self.set_raw(key, &raw),
            None => log::warn!("record for '{}' is not serializable", key),
        }
    }

    /// Drops transient selections written by an older build. Carts,
    /// histories and favorites survive the upgrade.
    pub fn ensure_schema(&self) {
        let stored = self
            .get_raw(StoreKey::StoreSchemaVersion)
            .and_then(|raw| raw.trim().parse::<u32>().ok());
        match stored {
            Some(version) if version >= STORE_SCHEMA_VERSION => {}
            _ => {
                log::info!(
                    "store schema {:?} -> {}, clearing transient selections",
                    stored,
                    STORE_SCHEMA_VERSION
                );
                for key in StoreKey::transient() {
                    self.remove(key);
                }
                self.set_raw(
                    StoreKey::StoreSchemaVersion,
                    &STORE_SCHEMA_VERSION.to_string(),
                );
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{memory_store, DisabledStore, FullStore};
    use super::*;
    use contracts::domain::common::{Cart, CartLine, OrderRecord};
    use contracts::domain::a001_travel::TravelSearch;
    use contracts::system::{Favorites, RecentlyViewedEntry};

    const MALFORMED: [&str; 6] = ["", "{", "undefined", "[object Object]", "{\"items\":5}", "null"];

    #[test]
    fn test_malformed_values_read_as_defaults() {
        let store = memory_store();
        for raw in MALFORMED {
            store.set_raw(StoreKey::FoodCart, raw);
            store.set_raw(StoreKey::ShoppingOrderHistory, raw);
            store.set_raw(StoreKey::Favorites, raw);
            store.set_raw(StoreKey::RecentlyViewed, raw);
            store.set_raw(StoreKey::TravelSearch, raw);
            store.set_raw(StoreKey::CompareItems, raw);

            assert_eq!(store.load::<Cart>(StoreKey::FoodCart), Cart::default());
            assert!(store
                .load::<Vec<OrderRecord>>(StoreKey::ShoppingOrderHistory)
                .is_empty());
            assert_eq!(store.load::<Favorites>(StoreKey::Favorites), Favorites::default());
            assert!(store
                .load::<Vec<RecentlyViewedEntry>>(StoreKey::RecentlyViewed)
                .is_empty());
            assert_eq!(
                store.load::<TravelSearch>(StoreKey::TravelSearch),
                TravelSearch::default()
            );
            assert!(store
                .load_opt::<Vec<contracts::domain::a004_shopping::Product>>(StoreKey::CompareItems)
                .map(|items| items.is_empty())
                .unwrap_or(true));
        }
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let store = memory_store();
        let first = Cart::default().add_item(CartLine::new("a", "A", 10.0));
        let second = Cart::default().add_item(CartLine::new("b", "B", 20.0));
        store.save(StoreKey::ShoppingCart, &first);
        store.save(StoreKey::ShoppingCart, &second);
        assert_eq!(store.load::<Cart>(StoreKey::ShoppingCart), second);
    }

    #[test]
    fn test_missing_selection_is_none() {
        let store = memory_store();
        assert!(store
            .load_opt::<contracts::domain::a001_travel::Flight>(StoreKey::SelectedFlight)
            .is_none());
        assert_eq!(
            store.try_load::<Cart>(StoreKey::FoodCart),
            Err(DecodeError::Missing)
        );
    }

    #[test]
    fn test_failing_backends_never_panic() {
        let full = PersistedStore::new(Arc::new(FullStore::default()));
        full.save(StoreKey::FoodCart, &Cart::default().add_item(CartLine::new("a", "A", 1.0)));
        full.remove(StoreKey::FoodCart);
        assert_eq!(full.load::<Cart>(StoreKey::FoodCart), Cart::default());

        let disabled = PersistedStore::new(Arc::new(DisabledStore));
        disabled.set_raw(StoreKey::SelectedOfferCode, "WELCOME50");
        assert_eq!(disabled.get_raw(StoreKey::SelectedOfferCode), None);
        disabled.ensure_schema();
        assert!(disabled.load::<Vec<OrderRecord>>(StoreKey::FoodOrderHistory).is_empty());
    }

    #[test]
    fn test_schema_upgrade_drops_only_transient_keys() {
        let store = memory_store();
        let cart = Cart::default().add_item(CartLine::new("a", "A", 10.0));
        store.save(StoreKey::FoodCart, &cart);
        store.set_raw(StoreKey::SelectedProduct, "{\"id\":\"old-shape\"}");
        store.set_raw(StoreKey::SelectedOfferCode, "SHOP15");
        store.set_raw(StoreKey::StoreSchemaVersion, "1");

        store.ensure_schema();

        assert_eq!(store.get_raw(StoreKey::SelectedProduct), None);
        assert_eq!(store.get_raw(StoreKey::SelectedOfferCode), None);
        assert_eq!(store.load::<Cart>(StoreKey::FoodCart), cart);
        assert_eq!(
            store.get_raw(StoreKey::StoreSchemaVersion),
            Some(STORE_SCHEMA_VERSION.to_string())
        );

        store.set_raw(StoreKey::SelectedOfferCode, "SHOP15");
        store.ensure_schema();
        assert_eq!(store.get_raw(StoreKey::SelectedOfferCode).as_deref(), Some("SHOP15"));
    }

    #[test]
    fn test_raw_keys_stay_plain_strings() {
        let store = memory_store();
        store.set_raw(StoreKey::SelectedOfferCode, "SHOP15");
        store.save(StoreKey::SelectedOfferCode, &"WELCOME50".to_string());
        assert_eq!(store.get_raw(StoreKey::SelectedOfferCode).as_deref(), Some("SHOP15"));

        store.set_raw(StoreKey::HeroGradient, "\"cyan-teal\"");
        assert!(matches!(
            store.try_load::<String>(StoreKey::HeroGradient),
            Err(DecodeError::Invalid(_))
        ));
        assert_eq!(store.load_opt::<String>(StoreKey::HeroGradient), None);
    }
}
