//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the three collections live so the
//! rest of the application never touches persistence details.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON array blob per category
//!   (`movies.json`, `books.json`, `events.json`) in the data directory.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.
//!
//! ## Failure policy
//!
//! Persistence failures are non-fatal everywhere in this application: a
//! collection that cannot be read degrades to an empty one, and a write that
//! fails leaves memory and disk diverged until the next successful write.
//! That policy is encoded in the trait's signatures — `load` hands back a
//! plain `Vec` and `save` returns nothing, so callers have no error path to
//! mishandle. Implementations log the swallowed failure via `tracing`.
//!
//! Every `save` rewrites the whole collection; there are no partial updates,
//! no versioning field and no migration of malformed blobs.

use crate::model::{Category, Entry};

pub mod fs;
pub mod memory;

/// Abstract interface for collection storage.
pub trait DataStore {
    /// Read a category's full collection. Missing or unreadable data
    /// yields an empty collection.
    fn load(&self, category: Category) -> Vec<Entry>;

    /// Overwrite a category's full collection.
    fn save(&mut self, category: Category, entries: &[Entry]);
}
