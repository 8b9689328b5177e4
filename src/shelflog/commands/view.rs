use crate::commands::{CmdResult, DisplayEntry};
use crate::error::Result;
use crate::model::Entry;

use super::helpers::indexed_entries;

/// Resolves display indexes to their entries for full display.
pub fn run(collection: &[Entry], indexes: &[usize]) -> Result<CmdResult> {
    let indexed = indexed_entries(collection);
    let mut listed: Vec<DisplayEntry> = Vec::with_capacity(indexes.len());
    for &idx in indexes {
        let found = indexed
            .iter()
            .find(|de| de.index == idx)
            .cloned()
            .ok_or_else(|| {
                crate::error::ShelflogError::Api(format!(
                    "Index {} not found in this category",
                    idx
                ))
            })?;
        listed.push(found);
    }
    Ok(CmdResult::default().with_listed_entries(listed))
}
