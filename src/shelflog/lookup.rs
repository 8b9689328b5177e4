//! Debounced metadata lookup session.
//!
//! The interactive movie prompt feeds every keystroke into a
//! [`LookupSession`]; a request is only fired once the query text has been
//! stable for the configured quiescence window, so rapid typing collapses
//! to a single outbound search for the final text.
//!
//! Fired requests are tagged with a monotonically increasing generation and
//! the session keeps a single in-flight slot. A completion for anything but
//! the latest generation is dropped, so a slow stale response can never
//! clobber the results of a newer query.

use crate::tmdb::MovieCandidate;
use std::time::{Duration, Instant};

/// Cancellable quiescence timer: `submit` restarts it, `poll` yields the
/// text once it has sat unchanged for the full window.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Records new text and restarts the timer.
    pub fn submit(&mut self, text: &str, now: Instant) {
        self.pending = Some((text.to_string(), now));
    }

    /// Yields the pending text once stable, at most once per submission.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, since)) if now.duration_since(*since) >= self.window => {
                self.pending.take().map(|(text, _)| text)
            }
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// A request the session has decided to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredRequest {
    pub generation: u64,
    pub query: String,
}

pub struct LookupSession {
    debouncer: Debouncer,
    generation: u64,
    in_flight: bool,
    results: Vec<MovieCandidate>,
}

impl LookupSession {
    pub fn new(window: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(window),
            generation: 0,
            in_flight: false,
            results: Vec::new(),
        }
    }

    /// Feed the current query text (typically on every keystroke).
    pub fn input(&mut self, text: &str, now: Instant) {
        self.debouncer.submit(text, now);
    }

    /// Checks the timer; once the query is stable, hands the caller a
    /// generation-tagged request to issue. Empty queries clear the
    /// candidate list instead of firing.
    pub fn tick(&mut self, now: Instant) -> Option<FiredRequest> {
        let query = self.debouncer.poll(now)?;
        if query.trim().is_empty() {
            self.results.clear();
            return None;
        }
        self.generation += 1;
        self.in_flight = true;
        Some(FiredRequest {
            generation: self.generation,
            query,
        })
    }

    /// Delivers results for a fired request. Returns whether they were
    /// accepted; anything older than the latest fired generation is stale
    /// and ignored.
    pub fn complete(&mut self, generation: u64, results: Vec<MovieCandidate>) -> bool {
        if generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "dropping stale lookup response");
            return false;
        }
        self.in_flight = false;
        self.results = results;
        true
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn results(&self) -> &[MovieCandidate] {
        &self.results
    }
}
