//! # Library Controller
//!
//! [`Library`] is the single entry point for all shelflog operations,
//! regardless of the UI driving it. It owns the three in-memory collections
//! (read from the store exactly once, when opened), the active category, and
//! the edit-form state, and mediates every mutation: memory is updated
//! first, then the affected collection is written back whole through the
//! [`DataStore`].
//!
//! Generic over `DataStore`:
//! - Production: `Library<FileStore>`
//! - Testing: `Library<InMemoryStore>`
//!
//! The controller never touches stdout/stderr and never prompts; the delete
//! confirmation decision is made by the caller and passed in.

use crate::commands::{self, CmdResult};
use crate::error::{Result, ShelflogError};
use crate::model::{Category, Entry};
use crate::store::DataStore;
use std::collections::HashMap;
use uuid::Uuid;

/// The edit form is either closed, open to create a new entry in a
/// category, or open on an existing entry. Transitions are driven solely by
/// `begin_edit`, `save` (submit) and `cancel_edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Create(Category),
    Edit(Uuid),
}

pub struct Library<S: DataStore> {
    store: S,
    collections: HashMap<Category, Vec<Entry>>,
    active: Category,
    form: FormState,
}

impl<S: DataStore> Library<S> {
    /// Opens the library, reading all three collections into memory.
    /// Unreadable collections come back empty per the store's contract.
    pub fn open(store: S, active: Category) -> Self {
        let mut collections = HashMap::new();
        for category in Category::ALL {
            collections.insert(category, store.load(category));
        }
        Self {
            store,
            collections,
            active,
            form: FormState::Closed,
        }
    }

    pub fn active_category(&self) -> Category {
        self.active
    }

    /// Switches the displayed category. Stored data is unaffected.
    pub fn select_category(&mut self, category: Category) {
        self.active = category;
    }

    pub fn form(&self) -> FormState {
        self.form
    }

    pub fn collection(&self, category: Category) -> &[Entry] {
        self.collections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn entry(&self, category: Category, id: Uuid) -> Option<&Entry> {
        self.collection(category).iter().find(|e| e.id == id)
    }

    /// Opens the form: `None` means "create new in the active category"; an
    /// id means "edit this entry", whichever category it belongs to.
    pub fn begin_edit(&mut self, target: Option<Uuid>) -> Result<()> {
        self.form = match target {
            None => FormState::Create(self.active),
            Some(id) => {
                if !Category::ALL
                    .iter()
                    .any(|&c| self.entry(c, id).is_some())
                {
                    return Err(ShelflogError::EntryNotFound(id));
                }
                FormState::Edit(id)
            }
        };
        Ok(())
    }

    /// Closes the form without saving.
    pub fn cancel_edit(&mut self) {
        self.form = FormState::Closed;
    }

    /// Submits the form: upsert by id, persist the full collection, close
    /// the form. The entry's own category tag decides which collection it
    /// lands in; the tag never changes on edit.
    pub fn save(&mut self, entry: Entry) -> Result<CmdResult> {
        let category = entry.category();
        let collection = self.collections.entry(category).or_default();
        let result = commands::save::run(collection, &mut self.store, category, entry)?;
        self.form = FormState::Closed;
        Ok(result)
    }

    /// Removes an entry after the caller has obtained confirmation.
    /// `confirmed: false` is the decline path and is a no-op.
    pub fn delete(&mut self, category: Category, id: Uuid, confirmed: bool) -> Result<CmdResult> {
        let collection = self.collections.entry(category).or_default();
        commands::delete::run(collection, &mut self.store, category, id, confirmed)
    }

    /// The category's collection ordered for display: date descending,
    /// stable for equal dates.
    pub fn list_for_display(&self, category: Category) -> Result<CmdResult> {
        commands::list::run(self.collection(category))
    }

    pub fn view(&self, category: Category, indexes: &[usize]) -> Result<CmdResult> {
        commands::view::run(self.collection(category), indexes)
    }

    /// Resolves a display index (position in the date-descending listing)
    /// to the stable entry id.
    pub fn resolve_index(&self, category: Category, index: usize) -> Result<Uuid> {
        commands::helpers::resolve_index(self.collection(category), index)
    }
}
