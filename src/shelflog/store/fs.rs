use super::DataStore;
use crate::error::Result;
use crate::model::{Category, Entry};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: one pretty-printed JSON array per category under a
/// single root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn collection_path(&self, category: Category) -> PathBuf {
        self.root.join(format!("{}.json", category.file_stem()))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    fn read_collection(&self, category: Category) -> Result<Vec<Entry>> {
        let path = self.collection_path(category);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        let entries: Vec<Entry> = serde_json::from_str(&content)?;
        Ok(entries)
    }

    fn write_collection(&self, category: Category, entries: &[Entry]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(self.collection_path(category), content)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self, category: Category) -> Vec<Entry> {
        match self.read_collection(category) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(%category, error = %e, "failed to load collection, treating as empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, category: Category, entries: &[Entry]) {
        if let Err(e) = self.write_collection(category, entries) {
            tracing::warn!(%category, error = %e, "failed to persist collection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntryKind;
    use chrono::NaiveDate;

    fn event(title: &str) -> Entry {
        Entry::new(
            title.to_string(),
            "great night".to_string(),
            5,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            EntryKind::Event {
                location: "Roskilde".to_string(),
            },
        )
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load(Category::Movie).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let entry = event("Concert");
        store.save(Category::Event, &[entry.clone()]);

        let loaded = store.load(Category::Event);
        assert_eq!(loaded, vec![entry]);
    }

    #[test]
    fn collections_are_independent_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.save(Category::Event, &[event("Concert")]);

        assert!(store.collection_path(Category::Event).exists());
        assert!(!store.collection_path(Category::Book).exists());
        assert!(store.load(Category::Book).is_empty());
    }

    #[test]
    fn malformed_blob_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save(Category::Book, &[]);

        fs::write(store.collection_path(Category::Book), "{not json").unwrap();
        assert!(store.load(Category::Book).is_empty());
    }

    #[test]
    fn save_overwrites_whole_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        store.save(Category::Event, &[event("A"), event("B")]);
        store.save(Category::Event, &[event("C")]);

        let loaded = store.load(Category::Event);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "C");
    }
}
