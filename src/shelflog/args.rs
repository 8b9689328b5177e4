use clap::{Parser, Subcommand};

/// Returns the version string, including git hash and commit date for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelflog")]
#[command(version = get_version())]
#[command(about = "A personal log for movies, books, and events", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a new entry
    #[command(alias = "a")]
    Add {
        #[command(subcommand)]
        what: AddCommands,
    },

    /// List entries, most recent first
    #[command(alias = "ls")]
    List {
        /// Category to list (movie, book, event); defaults to the active one
        category: Option<String>,
    },

    /// View one or more entries in full
    #[command(alias = "v")]
    View {
        /// Display indexes from the listing (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Category the indexes refer to; defaults to the active one
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit an entry's fields
    #[command(alias = "e")]
    Edit {
        /// Display index from the listing
        index: String,

        /// Category the index refers to; defaults to the active one
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(long)]
        review: Option<String>,

        /// Star rating, 0 to 5
        #[arg(short, long)]
        rating: Option<u8>,

        /// Date in YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,

        /// Release year (movies)
        #[arg(short = 'y', long)]
        year: Option<String>,

        /// Poster image path (movies)
        #[arg(long)]
        poster: Option<String>,

        /// Metadata provider id (movies)
        #[arg(long)]
        tmdb_id: Option<i64>,

        /// Author (books)
        #[arg(short, long)]
        author: Option<String>,

        /// ISBN (books)
        #[arg(long)]
        isbn: Option<String>,

        /// Venue or location (events)
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Delete one or more entries
    #[command(alias = "rm")]
    Delete {
        /// Display indexes from the listing (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Category the indexes refer to; defaults to the active one
        #[arg(short, long)]
        category: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Switch the active category
    Use {
        /// movie, book or event
        category: String,
    },

    /// Search the movie metadata provider
    Lookup {
        /// Query text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (api-key, api-url, debounce-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddCommands {
    /// Log a movie you watched
    #[command(alias = "m")]
    Movie {
        /// Movie title (optional with --lookup)
        title: Option<String>,

        #[arg(long)]
        review: Option<String>,

        /// Star rating, 0 to 5
        #[arg(short, long)]
        rating: Option<u8>,

        /// Date watched, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Release year
        #[arg(short = 'y', long)]
        year: Option<String>,

        /// Poster image path
        #[arg(long)]
        poster: Option<String>,

        /// Metadata provider id
        #[arg(long)]
        tmdb_id: Option<i64>,

        /// Search the metadata provider interactively to pre-fill fields
        #[arg(short, long)]
        lookup: bool,
    },

    /// Log a book you read
    #[command(alias = "b")]
    Book {
        /// Book title
        title: String,

        #[arg(short, long)]
        author: Option<String>,

        #[arg(long)]
        isbn: Option<String>,

        #[arg(long)]
        review: Option<String>,

        /// Star rating, 0 to 5
        #[arg(short, long)]
        rating: Option<u8>,

        /// Date finished, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Log an event you attended
    #[command(alias = "e")]
    Event {
        /// Event title
        title: String,

        /// Venue or location
        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        review: Option<String>,

        /// Star rating, 0 to 5
        #[arg(short, long)]
        rating: Option<u8>,

        /// Date attended, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}
