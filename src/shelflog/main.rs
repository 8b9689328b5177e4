use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelflog::commands::{CmdMessage, DisplayEntry, MessageLevel};
use shelflog::config::ShelflogConfig;
use shelflog::error::{Result, ShelflogError};
use shelflog::library::Library;
use shelflog::model::{Category, Entry, EntryKind, MAX_RATING};
use shelflog::store::fs::FileStore;
use shelflog::tmdb::{MetadataSearch, MovieCandidate, TmdbClient};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unicode_width::UnicodeWidthStr;

mod args;
mod prompt;
use args::{AddCommands, Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelflog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    library: Library<FileStore>,
    config: ShelflogConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add { what }) => handle_add(&mut ctx, what),
        Some(Commands::List { category }) => handle_list(&mut ctx, category),
        Some(Commands::View { indexes, category }) => handle_view(&mut ctx, indexes, category),
        Some(Commands::Edit {
            index,
            category,
            title,
            review,
            rating,
            date,
            year,
            poster,
            tmdb_id,
            author,
            isbn,
            location,
        }) => handle_edit(
            &mut ctx,
            index,
            category,
            FieldUpdates {
                title,
                review,
                rating,
                date,
                year,
                poster,
                tmdb_id,
                author,
                isbn,
                location,
            },
        ),
        Some(Commands::Delete {
            indexes,
            category,
            yes,
        }) => handle_delete(&mut ctx, indexes, category, yes),
        Some(Commands::Use { category }) => handle_use(&mut ctx, category),
        Some(Commands::Lookup { query }) => handle_lookup(&ctx, query.join(" ")),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var("SHELFLOG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => ProjectDirs::from("com", "shelflog", "shelflog")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| ShelflogError::Store("Could not determine data directory".into()))?,
    };

    let config = ShelflogConfig::load(&data_dir);
    let store = FileStore::new(data_dir.clone());
    let library = Library::open(store, config.active_category);

    Ok(AppContext {
        library,
        config,
        data_dir,
    })
}

fn parse_category(ctx: &AppContext, arg: Option<String>) -> Result<Category> {
    match arg {
        Some(s) => s.parse().map_err(ShelflogError::Api),
        None => Ok(ctx.config.active_category),
    }
}

fn parse_indexes(indexes: &[String]) -> Result<Vec<usize>> {
    indexes
        .iter()
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| ShelflogError::Api(format!("Invalid index: {}", s)))
        })
        .collect()
}

fn parse_date(arg: Option<String>) -> Result<NaiveDate> {
    match arg {
        Some(s) => s
            .parse()
            .map_err(|_| ShelflogError::Api(format!("Invalid date (expected YYYY-MM-DD): {}", s))),
        None => Ok(Local::now().date_naive()),
    }
}

fn metadata_client(ctx: &AppContext) -> TmdbClient {
    TmdbClient::new(ctx.config.api_url.clone(), ctx.config.api_key())
}

fn handle_add(ctx: &mut AppContext, what: AddCommands) -> Result<()> {
    match what {
        AddCommands::Movie {
            title,
            review,
            rating,
            date,
            year,
            poster,
            tmdb_id,
            lookup,
        } => {
            let candidate = if lookup {
                if ctx.config.api_key().is_none() {
                    print_no_api_key_hint();
                    None
                } else {
                    let client = Arc::new(metadata_client(ctx));
                    let picked =
                        prompt::pick_movie(client, Duration::from_millis(ctx.config.debounce_ms))?;
                    if picked.is_none() && title.is_none() {
                        println!("{}", "Operation cancelled.".dimmed());
                        return Ok(());
                    }
                    picked
                }
            } else {
                None
            };

            let title = title
                .or_else(|| candidate.as_ref().map(|c| c.title.clone()))
                .ok_or_else(|| {
                    ShelflogError::Api("Title required (give one, or use --lookup)".into())
                })?;
            let kind = movie_kind(candidate.as_ref(), year, poster, tmdb_id);

            submit_new(
                ctx,
                Category::Movie,
                Entry::new(
                    title,
                    review.unwrap_or_default(),
                    rating.unwrap_or(0),
                    parse_date(date)?,
                    kind,
                ),
            )
        }
        AddCommands::Book {
            title,
            author,
            isbn,
            review,
            rating,
            date,
        } => submit_new(
            ctx,
            Category::Book,
            Entry::new(
                title,
                review.unwrap_or_default(),
                rating.unwrap_or(0),
                parse_date(date)?,
                EntryKind::Book {
                    author: author.unwrap_or_default(),
                    isbn: isbn.unwrap_or_default(),
                },
            ),
        ),
        AddCommands::Event {
            title,
            location,
            review,
            rating,
            date,
        } => submit_new(
            ctx,
            Category::Event,
            Entry::new(
                title,
                review.unwrap_or_default(),
                rating.unwrap_or(0),
                parse_date(date)?,
                EntryKind::Event {
                    location: location.unwrap_or_default(),
                },
            ),
        ),
    }
}

fn submit_new(ctx: &mut AppContext, category: Category, entry: Entry) -> Result<()> {
    ctx.library.select_category(category);
    ctx.library.begin_edit(None)?;
    let result = ctx.library.save(entry)?;
    print_messages(&result.messages);
    Ok(())
}

/// Pre-fill from the accepted candidate; explicit flags win.
fn movie_kind(
    candidate: Option<&MovieCandidate>,
    year: Option<String>,
    poster: Option<String>,
    tmdb_id: Option<i64>,
) -> EntryKind {
    EntryKind::Movie {
        release_year: year
            .or_else(|| candidate.map(|c| c.release_year().to_string()))
            .unwrap_or_default(),
        poster_path: poster.or_else(|| candidate.and_then(|c| c.poster_path.clone())),
        tmdb_id: tmdb_id
            .or_else(|| candidate.map(|c| c.tmdb_id))
            .unwrap_or(0),
    }
}

fn handle_list(ctx: &mut AppContext, category: Option<String>) -> Result<()> {
    let category = parse_category(ctx, category)?;
    ctx.library.select_category(category);
    let result = ctx.library.list_for_display(category)?;
    print_entries(category, &result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, indexes: Vec<String>, category: Option<String>) -> Result<()> {
    let category = parse_category(ctx, category)?;
    let parsed = parse_indexes(&indexes)?;
    let result = ctx.library.view(category, &parsed)?;
    print_full_entries(&result.listed_entries);
    print_messages(&result.messages);
    Ok(())
}

struct FieldUpdates {
    title: Option<String>,
    review: Option<String>,
    rating: Option<u8>,
    date: Option<String>,
    year: Option<String>,
    poster: Option<String>,
    tmdb_id: Option<i64>,
    author: Option<String>,
    isbn: Option<String>,
    location: Option<String>,
}

fn handle_edit(
    ctx: &mut AppContext,
    index: String,
    category: Option<String>,
    updates: FieldUpdates,
) -> Result<()> {
    let category = parse_category(ctx, category)?;
    let parsed = parse_indexes(&[index])?;
    let id = ctx.library.resolve_index(category, parsed[0])?;

    ctx.library.begin_edit(Some(id))?;
    let mut entry = ctx
        .library
        .entry(category, id)
        .cloned()
        .ok_or(ShelflogError::EntryNotFound(id))?;

    if let Some(t) = updates.title {
        entry.title = t;
    }
    if let Some(r) = updates.review {
        entry.review = r;
    }
    if let Some(r) = updates.rating {
        entry.rating = r;
    }
    if let Some(d) = updates.date {
        entry.date = parse_date(Some(d))?;
    }

    match &mut entry.kind {
        EntryKind::Movie {
            release_year,
            poster_path,
            tmdb_id,
        } => {
            reject_for(category, updates.author.is_some(), "--author")?;
            reject_for(category, updates.isbn.is_some(), "--isbn")?;
            reject_for(category, updates.location.is_some(), "--location")?;
            if let Some(y) = updates.year {
                *release_year = y;
            }
            if let Some(p) = updates.poster {
                *poster_path = Some(p);
            }
            if let Some(t) = updates.tmdb_id {
                *tmdb_id = t;
            }
        }
        EntryKind::Book { author, isbn } => {
            reject_for(category, updates.year.is_some(), "--year")?;
            reject_for(category, updates.poster.is_some(), "--poster")?;
            reject_for(category, updates.tmdb_id.is_some(), "--tmdb-id")?;
            reject_for(category, updates.location.is_some(), "--location")?;
            if let Some(a) = updates.author {
                *author = a;
            }
            if let Some(i) = updates.isbn {
                *isbn = i;
            }
        }
        EntryKind::Event { location } => {
            reject_for(category, updates.year.is_some(), "--year")?;
            reject_for(category, updates.poster.is_some(), "--poster")?;
            reject_for(category, updates.tmdb_id.is_some(), "--tmdb-id")?;
            reject_for(category, updates.author.is_some(), "--author")?;
            reject_for(category, updates.isbn.is_some(), "--isbn")?;
            if let Some(l) = updates.location {
                *location = l;
            }
        }
    }

    let result = ctx.library.save(entry)?;
    print_messages(&result.messages);
    Ok(())
}

fn reject_for(category: Category, given: bool, flag: &str) -> Result<()> {
    if given {
        return Err(ShelflogError::Api(format!(
            "{} does not apply to a {}",
            flag, category
        )));
    }
    Ok(())
}

fn handle_delete(
    ctx: &mut AppContext,
    indexes: Vec<String>,
    category: Option<String>,
    yes: bool,
) -> Result<()> {
    let category = parse_category(ctx, category)?;
    let parsed = parse_indexes(&indexes)?;
    // Resolve all ids up front so earlier deletions don't shift later indexes.
    let targets = ctx.library.view(category, &parsed)?.listed_entries;

    if !yes {
        println!("This will permanently remove the following entries:");
        for de in &targets {
            println!("  {}. {}", de.index, de.entry.title);
        }
        print!("Delete? [y/N]: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
            println!("{}", "Operation cancelled.".dimmed());
            return Ok(());
        }
    }

    for de in &targets {
        let result = ctx.library.delete(category, de.entry.id, true)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_use(ctx: &mut AppContext, category: String) -> Result<()> {
    let category: Category = category.parse().map_err(ShelflogError::Api)?;
    ctx.config.active_category = category;
    ctx.config.save(&ctx.data_dir)?;
    println!("{}", format!("Active category: {}", category).green());
    Ok(())
}

fn handle_lookup(ctx: &AppContext, query: String) -> Result<()> {
    if ctx.config.api_key().is_none() {
        print_no_api_key_hint();
        return Ok(());
    }

    let client = metadata_client(ctx);
    let results = client.search(&query);
    if results.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    for candidate in &results {
        let year = candidate.release_year();
        let year_part = if year.is_empty() {
            String::new()
        } else {
            format!(" ({})", year)
        };
        println!(
            "{}  {}{}",
            format!("{:>9}", candidate.tmdb_id).dimmed(),
            candidate.title,
            year_part.dimmed()
        );
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!(
                "api-key = {}",
                ctx.config.api_key.as_deref().unwrap_or("(unset)")
            );
            println!("api-url = {}", ctx.config.api_url);
            println!("debounce-ms = {}", ctx.config.debounce_ms);
        }
        (Some("api-key"), None) => {
            println!("{}", ctx.config.api_key.as_deref().unwrap_or("(unset)"))
        }
        (Some("api-key"), Some(v)) => {
            ctx.config.api_key = Some(v);
            ctx.config.save(&ctx.data_dir)?;
        }
        (Some("api-url"), None) => println!("{}", ctx.config.api_url),
        (Some("api-url"), Some(v)) => {
            ctx.config.api_url = v;
            ctx.config.save(&ctx.data_dir)?;
        }
        (Some("debounce-ms"), None) => println!("{}", ctx.config.debounce_ms),
        (Some("debounce-ms"), Some(v)) => {
            ctx.config.debounce_ms = v
                .parse()
                .map_err(|_| ShelflogError::Api(format!("Invalid milliseconds value: {}", v)))?;
            ctx.config.save(&ctx.data_dir)?;
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn print_no_api_key_hint() {
    println!(
        "{}",
        "No metadata API key configured. Set SHELFLOG_API_KEY or run `shelflog config api-key <key>`."
            .yellow()
    );
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

/// One-line summary of the category-specific fields.
fn kind_detail(entry: &Entry) -> String {
    match &entry.kind {
        EntryKind::Movie { release_year, .. } => {
            if release_year.is_empty() {
                String::new()
            } else {
                format!("({})", release_year)
            }
        }
        EntryKind::Book { author, .. } => {
            if author.is_empty() {
                String::new()
            } else {
                format!("by {}", author)
            }
        }
        EntryKind::Event { location } => {
            if location.is_empty() {
                String::new()
            } else {
                format!("@ {}", location)
            }
        }
    }
}

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 12;

fn print_entries(category: Category, entries: &[DisplayEntry]) {
    if entries.is_empty() {
        println!("No {}s logged yet.", category);
        return;
    }

    for de in entries {
        let idx_str = format!("{:>3}. ", de.index);
        let detail = kind_detail(&de.entry);
        let label = if detail.is_empty() {
            de.entry.title.clone()
        } else {
            format!("{} {}", de.entry.title, detail)
        };

        let fixed = idx_str.width() + 7 + DATE_WIDTH; // stars column + date column
        let available = LINE_WIDTH.saturating_sub(fixed);
        let label = truncate_to_width(&label, available);
        let padding = available.saturating_sub(label.width());

        println!(
            "{}{}  {}{}{}",
            idx_str.normal(),
            stars(de.entry.rating).yellow(),
            label,
            " ".repeat(padding),
            de.entry.date.to_string().dimmed()
        );
    }
}

fn print_full_entries(entries: &[DisplayEntry]) {
    for (i, de) in entries.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let entry = &de.entry;
        println!(
            "{} {}",
            format!("{}.", de.index).yellow(),
            entry.title.bold()
        );
        println!("--------------------------------");
        println!("{}  {}", stars(entry.rating).yellow(), entry.date);

        match &entry.kind {
            EntryKind::Movie {
                release_year,
                poster_path,
                tmdb_id,
            } => {
                if !release_year.is_empty() {
                    println!("Released: {}", release_year);
                }
                if let Some(poster) = poster_path {
                    println!("Poster: {}", poster);
                }
                if *tmdb_id != 0 {
                    println!("TMDB: {}", tmdb_id);
                }
            }
            EntryKind::Book { author, isbn } => {
                if !author.is_empty() {
                    println!("Author: {}", author);
                }
                if !isbn.is_empty() {
                    println!("ISBN: {}", isbn);
                }
            }
            EntryKind::Event { location } => {
                if !location.is_empty() {
                    println!("Location: {}", location);
                }
            }
        }

        if !entry.review.is_empty() {
            println!();
            println!("{}", entry.review);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
