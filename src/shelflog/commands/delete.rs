use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelflogError};
use crate::model::{Category, Entry};
use crate::store::DataStore;
use uuid::Uuid;

/// Removes an entry and persists the shrunk collection. The caller is
/// responsible for having obtained the user's confirmation; `confirmed:
/// false` means the user declined and nothing changes.
pub fn run<S: DataStore>(
    collection: &mut Vec<Entry>,
    store: &mut S,
    category: Category,
    id: Uuid,
    confirmed: bool,
) -> Result<CmdResult> {
    if !confirmed {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    let position = collection
        .iter()
        .position(|e| e.id == id)
        .ok_or(ShelflogError::EntryNotFound(id))?;
    let removed = collection.remove(position);

    store.save(category, collection);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {}: {}",
        category, removed.title
    )));
    result.affected_entries.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::movie;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_entry_and_persists_reduced_collection() {
        let mut store = InMemoryStore::new();
        let mut collection = vec![
            movie("A", "2024-01-01"),
            movie("B", "2024-01-02"),
            movie("C", "2024-01-03"),
        ];
        store.save(Category::Movie, &collection);
        let target = collection[1].id;

        run(&mut collection, &mut store, Category::Movie, target, true).unwrap();

        assert_eq!(collection.len(), 2);
        assert!(collection.iter().all(|e| e.id != target));
        assert_eq!(store.load(Category::Movie).len(), 2);
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let mut store = InMemoryStore::new();
        let mut collection = vec![movie("A", "2024-01-01")];
        store.save(Category::Movie, &collection);
        let target = collection[0].id;

        let result = run(&mut collection, &mut store, Category::Movie, target, false).unwrap();

        assert!(result.affected_entries.is_empty());
        assert_eq!(collection.len(), 1);
        assert_eq!(store.load(Category::Movie).len(), 1);
    }

    #[test]
    fn unknown_id_is_an_error() {
        let mut store = InMemoryStore::new();
        let mut collection = vec![movie("A", "2024-01-01")];

        let result = run(
            &mut collection,
            &mut store,
            Category::Movie,
            Uuid::new_v4(),
            true,
        );
        assert!(matches!(result, Err(ShelflogError::EntryNotFound(_))));
    }
}
