//! # Command Layer
//!
//! Business logic for each operation, free of I/O assumptions. Commands
//! operate on a category's in-memory collection (owned by
//! [`crate::library::Library`]) plus the [`crate::store::DataStore`] used to
//! persist the mutated collection, and return structured [`CmdResult`]
//! values for the UI layer to render.

use crate::model::Entry;

pub mod delete;
pub mod helpers;
pub mod list;
pub mod save;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An entry paired with its 1-based position in the date-descending listing
/// of its category. This is the index users type on the command line.
#[derive(Debug, Clone)]
pub struct DisplayEntry {
    pub entry: Entry,
    pub index: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<DisplayEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }
}
