//! Interactive metadata lookup prompt for `add movie --lookup`.
//!
//! Keystrokes feed a [`LookupSession`]; searches fire on a worker thread
//! once the query has been stable for the debounce window, and candidates
//! render below the query line. Arrow keys move the selection, Enter
//! accepts, Esc cancels. Nothing is saved here — the accepted candidate
//! only pre-fills the add-movie fields.

use colored::*;
use console::{Key, Term};
use shelflog::error::Result;
use shelflog::lookup::LookupSession;
use shelflog::tmdb::{MetadataSearch, MovieCandidate};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const MAX_SHOWN: usize = 8;
const TICK: Duration = Duration::from_millis(50);

enum Event {
    Key(Key),
    Tick,
    Results { generation: u64, results: Vec<MovieCandidate> },
}

pub fn pick_movie<C>(client: Arc<C>, debounce: Duration) -> Result<Option<MovieCandidate>>
where
    C: MetadataSearch + Send + Sync + 'static,
{
    let term = Term::stderr();
    let (tx, rx) = mpsc::channel::<Event>();

    // Keystroke reader. Detached on purpose: it dies with the process.
    {
        let tx = tx.clone();
        let term = term.clone();
        thread::spawn(move || {
            while let Ok(key) = term.read_key() {
                if tx.send(Event::Key(key)).is_err() {
                    break;
                }
            }
        });
    }

    // Ticker so the debounce timer advances while no key is pressed.
    {
        let tx = tx.clone();
        thread::spawn(move || loop {
            thread::sleep(TICK);
            if tx.send(Event::Tick).is_err() {
                break;
            }
        });
    }

    let mut session = LookupSession::new(debounce);
    let mut query = String::new();
    let mut selected: usize = 0;
    let mut printed_lines: usize = 0;

    term.write_line("Search for a movie (Enter to accept, Esc to cancel):")?;

    loop {
        let event = rx
            .recv()
            .map_err(|e| shelflog::error::ShelflogError::Api(e.to_string()))?;

        let mut dirty = !matches!(&event, Event::Tick);
        match event {
            Event::Key(Key::Escape) => {
                clear(&term, printed_lines)?;
                return Ok(None);
            }
            Event::Key(Key::Enter) => {
                if let Some(candidate) = session.results().get(selected) {
                    let chosen = candidate.clone();
                    clear(&term, printed_lines)?;
                    return Ok(Some(chosen));
                }
            }
            Event::Key(Key::Backspace) => {
                query.pop();
                session.input(&query, Instant::now());
            }
            Event::Key(Key::Char(c)) => {
                query.push(c);
                session.input(&query, Instant::now());
            }
            Event::Key(Key::ArrowUp) => {
                selected = selected.saturating_sub(1);
            }
            Event::Key(Key::ArrowDown) => {
                if selected + 1 < session.results().len().min(MAX_SHOWN) {
                    selected += 1;
                }
            }
            Event::Key(_) => {}
            Event::Tick => {}
            Event::Results { generation, results } => {
                if session.complete(generation, results) {
                    selected = 0;
                }
            }
        }

        if let Some(fired) = session.tick(Instant::now()) {
            dirty = true;
            let tx = tx.clone();
            let client = Arc::clone(&client);
            thread::spawn(move || {
                let results = client.search(&fired.query);
                let _ = tx.send(Event::Results {
                    generation: fired.generation,
                    results,
                });
            });
        }

        if dirty {
            printed_lines = redraw(&term, printed_lines, &query, &session, selected)?;
        }
    }
}

fn clear(term: &Term, lines: usize) -> Result<()> {
    term.clear_last_lines(lines)?;
    Ok(())
}

fn redraw(
    term: &Term,
    previous_lines: usize,
    query: &str,
    session: &LookupSession,
    selected: usize,
) -> Result<usize> {
    clear(term, previous_lines)?;

    let status = if session.in_flight() { " …" } else { "" };
    term.write_line(&format!("> {}{}", query, status.dimmed()))?;
    let mut lines = 1;

    for (i, candidate) in session.results().iter().take(MAX_SHOWN).enumerate() {
        let year = candidate.release_year();
        let label = if year.is_empty() {
            candidate.title.clone()
        } else {
            format!("{} ({})", candidate.title, year)
        };
        let line = if i == selected {
            format!("  {} {}", ">".green().bold(), label.bold())
        } else {
            format!("    {}", label)
        };
        term.write_line(&line)?;
        lines += 1;
    }

    Ok(lines)
}
