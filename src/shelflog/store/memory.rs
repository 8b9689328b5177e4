use super::DataStore;
use crate::model::{Category, Entry};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    collections: HashMap<Category, Vec<Entry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, category: Category) -> Vec<Entry> {
        self.collections.get(&category).cloned().unwrap_or_default()
    }

    fn save(&mut self, category: Category, entries: &[Entry]) {
        self.collections.insert(category, entries.to_vec());
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::EntryKind;
    use chrono::NaiveDate;

    pub fn movie(title: &str, date: &str) -> Entry {
        Entry::new(
            title.to_string(),
            String::new(),
            3,
            date.parse().unwrap(),
            EntryKind::Movie {
                release_year: "2020".to_string(),
                poster_path: None,
                tmdb_id: 0,
            },
        )
    }

    pub fn book(title: &str, author: &str, date: &str) -> Entry {
        Entry::new(
            title.to_string(),
            String::new(),
            4,
            date.parse().unwrap(),
            EntryKind::Book {
                author: author.to_string(),
                isbn: String::new(),
            },
        )
    }

    pub fn event(title: &str, location: &str, date: &str) -> Entry {
        Entry::new(
            title.to_string(),
            String::new(),
            5,
            date.parse().unwrap(),
            EntryKind::Event {
                location: location.to_string(),
            },
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_movies(mut self, count: usize) -> Self {
            let entries: Vec<Entry> = (0..count)
                .map(|i| movie(&format!("Movie {}", i + 1), "2024-01-01"))
                .collect();
            self.store.save(Category::Movie, &entries);
            self
        }

        pub fn with_entry(mut self, entry: Entry) -> Self {
            let category = entry.category();
            let mut entries = self.store.load(category);
            entries.push(entry);
            self.store.save(category, &entries);
            self
        }
    }
}
