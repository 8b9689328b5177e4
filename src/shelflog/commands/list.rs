use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Entry;

use super::helpers::indexed_entries;

/// Lists a collection in display order: most recent date first.
pub fn run(collection: &[Entry]) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_entries(indexed_entries(collection)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{event, movie};

    #[test]
    fn lists_most_recent_first_regardless_of_insertion_order() {
        let collection = vec![
            movie("First logged", "2023-06-01"),
            movie("Second logged", "2024-06-01"),
        ];

        let result = run(&collection).unwrap();
        assert_eq!(result.listed_entries[0].entry.title, "Second logged");
        assert_eq!(result.listed_entries[1].entry.title, "First logged");
    }

    #[test]
    fn empty_collection_lists_nothing() {
        let result = run(&[]).unwrap();
        assert!(result.listed_entries.is_empty());
    }

    #[test]
    fn dates_are_non_increasing() {
        let collection = vec![
            event("A", "here", "2024-01-05"),
            event("B", "there", "2024-03-01"),
            event("C", "elsewhere", "2024-02-10"),
            event("D", "home", "2024-03-01"),
        ];

        let result = run(&collection).unwrap();
        let dates: Vec<_> = result
            .listed_entries
            .iter()
            .map(|de| de.entry.date)
            .collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }
}
