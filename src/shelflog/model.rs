use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three fixed entry kinds. Each category owns an independent
/// collection; an entry never changes category after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Movie,
    Book,
    Event,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Movie, Category::Book, Category::Event];

    /// File stem of the category's collection blob (e.g. `movies.json`).
    pub fn file_stem(&self) -> &'static str {
        match self {
            Category::Movie => "movies",
            Category::Book => "books",
            Category::Event => "events",
        }
    }

    /// What the `date` field means for this category.
    pub fn date_label(&self) -> &'static str {
        match self {
            Category::Movie => "watched",
            Category::Book => "read",
            Category::Event => "attended",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Movie => write!(f, "movie"),
            Category::Book => write!(f, "book"),
            Category::Event => write!(f, "event"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" | "movies" | "m" => Ok(Category::Movie),
            "book" | "books" | "b" => Ok(Category::Book),
            "event" | "events" | "e" => Ok(Category::Event),
            other => Err(format!(
                "Unknown category: {} (expected movie, book or event)",
                other
            )),
        }
    }
}

/// Category-specific fields, tagged by `category` in the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum EntryKind {
    Movie {
        release_year: String,
        poster_path: Option<String>,
        /// Metadata provider id; 0 means not linked.
        tmdb_id: i64,
    },
    Book {
        author: String,
        isbn: String,
    },
    Event {
        location: String,
    },
}

impl EntryKind {
    pub fn category(&self) -> Category {
        match self {
            EntryKind::Movie { .. } => Category::Movie,
            EntryKind::Book { .. } => Category::Book,
            EntryKind::Event { .. } => Category::Event,
        }
    }
}

pub const MAX_RATING: u8 = 5;

/// A logged movie, book or event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub title: String,
    pub review: String,
    /// Star rating in 0..=5.
    pub rating: u8,
    /// Calendar date, meaning per `Category::date_label`.
    pub date: NaiveDate,
    #[serde(flatten)]
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(title: String, review: String, rating: u8, date: NaiveDate, kind: EntryKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            review,
            rating,
            date,
            kind,
        }
    }

    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Entry {
        Entry::new(
            title.to_string(),
            String::new(),
            4,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            EntryKind::Movie {
                release_year: "2021".to_string(),
                poster_path: None,
                tmdb_id: 0,
            },
        )
    }

    #[test]
    fn category_follows_kind() {
        assert_eq!(movie("Dune").category(), Category::Movie);
    }

    #[test]
    fn record_round_trips_with_category_tag() {
        let entry = movie("Dune");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"category\":\"movie\""));

        let parsed: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn category_parses_aliases() {
        use std::str::FromStr;
        assert_eq!(Category::from_str("Books").unwrap(), Category::Book);
        assert_eq!(Category::from_str("e").unwrap(), Category::Event);
        assert!(Category::from_str("album").is_err());
    }
}
