use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelflogError};
use crate::model::{Category, Entry, MAX_RATING};
use crate::store::DataStore;

/// Upserts an entry into its category's collection: replaces the record
/// matching its id in place, or appends if the id is new. The full mutated
/// collection is written back through the store either way.
pub fn run<S: DataStore>(
    collection: &mut Vec<Entry>,
    store: &mut S,
    category: Category,
    entry: Entry,
) -> Result<CmdResult> {
    if entry.category() != category {
        return Err(ShelflogError::Api(format!(
            "Entry is a {}, not a {}",
            entry.category(),
            category
        )));
    }
    if entry.title.trim().is_empty() {
        return Err(ShelflogError::Api("Title cannot be empty".into()));
    }
    if entry.rating > MAX_RATING {
        return Err(ShelflogError::Api(format!(
            "Rating must be between 0 and {}",
            MAX_RATING
        )));
    }

    let replaced = match collection.iter_mut().find(|e| e.id == entry.id) {
        Some(existing) => {
            *existing = entry.clone();
            true
        }
        None => {
            collection.push(entry.clone());
            false
        }
    };

    store.save(category, collection);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} {}: {}",
        if replaced { "Updated" } else { "Logged" },
        category,
        entry.title
    )));
    result.affected_entries.push(entry);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{book, movie};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_new_entry_and_persists() {
        let mut store = InMemoryStore::new();
        let mut collection = Vec::new();

        let entry = movie("Dune", "2024-03-01");
        run(&mut collection, &mut store, Category::Movie, entry.clone()).unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(store.load(Category::Movie), vec![entry]);
    }

    #[test]
    fn replaces_existing_entry_by_id() {
        let mut store = InMemoryStore::new();
        let mut collection = vec![movie("Dune", "2024-03-01")];
        store.save(Category::Movie, &collection);

        let mut edited = collection[0].clone();
        edited.rating = 5;
        edited.review = "rewatch held up".to_string();
        run(&mut collection, &mut store, Category::Movie, edited.clone()).unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0], edited);
        assert_eq!(store.load(Category::Movie), vec![edited]);
    }

    #[test]
    fn saving_identical_content_twice_is_idempotent() {
        let mut store = InMemoryStore::new();
        let mut collection = Vec::new();
        let entry = movie("Dune", "2024-03-01");

        run(&mut collection, &mut store, Category::Movie, entry.clone()).unwrap();
        run(&mut collection, &mut store, Category::Movie, entry.clone()).unwrap();

        assert_eq!(collection, vec![entry]);
    }

    #[test]
    fn rejects_empty_title() {
        let mut store = InMemoryStore::new();
        let mut collection = Vec::new();
        let mut entry = movie("Dune", "2024-03-01");
        entry.title = "   ".to_string();

        assert!(run(&mut collection, &mut store, Category::Movie, entry).is_err());
        assert!(collection.is_empty());
    }

    #[test]
    fn rejects_rating_out_of_range() {
        let mut store = InMemoryStore::new();
        let mut collection = Vec::new();
        let mut entry = movie("Dune", "2024-03-01");
        entry.rating = 6;

        assert!(run(&mut collection, &mut store, Category::Movie, entry).is_err());
    }

    #[test]
    fn rejects_category_mismatch() {
        let mut store = InMemoryStore::new();
        let mut collection = Vec::new();
        let entry = book("Dune", "Frank Herbert", "2024-03-01");

        assert!(run(&mut collection, &mut store, Category::Movie, entry).is_err());
    }
}
