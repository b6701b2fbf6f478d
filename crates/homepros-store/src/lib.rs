mod search;
mod settings;

pub use search::{
    city_facets, industry_facets, normalize_limit, search, SearchFilters, SearchResult, SortKey,
    DEFAULT_LIMIT,
};
pub use settings::{SettingsError, SettingsStore};

use std::sync::{Arc, PoisonError, RwLock};

use homepros_core::Service;

/// In-memory collection holding the current generation of service records.
///
/// Readers take a cheap `Arc` snapshot. `replace_all` builds nothing in
/// place: the new generation is assembled by the caller and the snapshot
/// reference is swapped in one step, so a search racing a sync observes
/// either the old generation or the new one, never a half-populated store.
#[derive(Debug, Default)]
pub struct ServiceStore {
    services: RwLock<Arc<Vec<Service>>>,
}

impl ServiceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot, duplicate-flagged records included.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Service>> {
        Arc::clone(
            &self
                .services
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Every record including duplicates. Only the raw listing endpoint
    /// wants this; every other read path goes through [`Self::search`].
    #[must_use]
    pub fn get_all(&self) -> Vec<Service> {
        self.snapshot().as_ref().clone()
    }

    /// Replaces the whole collection with a new generation in one swap.
    pub fn replace_all(&self, services: Vec<Service>) {
        let next = Arc::new(services);
        *self
            .services
            .write()
            .unwrap_or_else(PoisonError::into_inner) = next;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Runs the search engine against the current snapshot.
    #[must_use]
    pub fn search(&self, filters: &SearchFilters) -> SearchResult {
        search(&self.snapshot(), filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: i64, title: &str) -> Service {
        Service {
            id,
            title: title.to_string(),
            industry: "Plumber".to_string(),
            rating: 4.0,
            reviews: 10,
            phone: String::new(),
            address: String::new(),
            website: None,
            maps_link: None,
            email: None,
            featured: false,
            verified: false,
            licensed: false,
            duplicate: false,
        }
    }

    #[test]
    fn replace_all_swaps_the_generation_wholesale() {
        let store = ServiceStore::new();
        store.replace_all(vec![service(1, "First")]);
        assert_eq!(store.len(), 1);

        store.replace_all(vec![service(2, "Second"), service(3, "Third")]);
        let all = store.get_all();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|s| s.id != 1), "old generation fully gone");
    }

    #[test]
    fn snapshot_taken_before_replace_keeps_old_generation() {
        let store = ServiceStore::new();
        store.replace_all(vec![service(1, "First")]);

        let before = store.snapshot();
        store.replace_all(vec![service(2, "Second")]);

        assert_eq!(before[0].id, 1, "held snapshot is immutable");
        assert_eq!(store.snapshot()[0].id, 2);
    }

    #[test]
    fn new_store_is_empty() {
        let store = ServiceStore::new();
        assert!(store.is_empty());
        assert!(store.get_all().is_empty());
    }
}
