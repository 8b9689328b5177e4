use crate::commands::DisplayEntry;
use crate::error::{Result, ShelflogError};
use crate::model::Entry;
use uuid::Uuid;

/// Orders a collection for display: date descending, ties left in their
/// insertion-relative order (stable sort), and assigns 1-based indexes.
pub fn indexed_entries(entries: &[Entry]) -> Vec<DisplayEntry> {
    let mut sorted: Vec<Entry> = entries.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry {
            entry,
            index: i + 1,
        })
        .collect()
}

/// Maps a display index back to the stable id it currently denotes.
pub fn resolve_index(entries: &[Entry], index: usize) -> Result<Uuid> {
    indexed_entries(entries)
        .into_iter()
        .find(|de| de.index == index)
        .map(|de| de.entry.id)
        .ok_or_else(|| ShelflogError::Api(format!("Index {} not found in this category", index)))
}

pub fn resolve_indexes(entries: &[Entry], indexes: &[usize]) -> Result<Vec<(usize, Uuid)>> {
    indexes
        .iter()
        .map(|&idx| resolve_index(entries, idx).map(|id| (idx, id)))
        .collect()
}
