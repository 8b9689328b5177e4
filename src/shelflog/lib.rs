//! # Shelflog Architecture
//!
//! Shelflog is a **UI-agnostic media-logging library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, prompts the user       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller Layer (library.rs)                              │
//! │  - Owns the three in-memory collections and the form state  │
//! │  - Mediates every mutation: memory first, then persistence  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait, whole-collection JSON blobs    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The metadata lookup side ([`tmdb`] + [`lookup`]) sits next to this stack
//! rather than inside it: search results only ever pre-fill the movie form,
//! and nothing reaches a collection until the user explicitly accepts a
//! candidate and submits.
//!
//! ## Failure Policy
//!
//! Persistence and metadata failures are non-fatal by design. The store
//! degrades unreadable collections to empty ones and swallows write
//! failures; the metadata client answers every failure with an empty
//! candidate list. Both log the swallowed error via `tracing`. Validation
//! problems (empty title, out-of-range rating, bad index) are real errors
//! and propagate to the CLI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the business logic
//!    against `InMemoryStore`. This is where the lion's share of testing
//!    lives.
//! 2. **Controller** (`library.rs`): state-machine and mediation tests,
//!    fully headless.
//! 3. **Lookup** (`lookup.rs`): debounce and stale-response tests against a
//!    recording fake client.
//! 4. **CLI**: integration tests driving the binary with an isolated
//!    `SHELFLOG_HOME`.
//!
//! ## Module Overview
//!
//! - [`library`]: The controller—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Entry`, `EntryKind`, `Category`)
//! - [`tmdb`]: Movie metadata search client
//! - [`lookup`]: Debounced lookup session for the interactive prompt
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod lookup;
pub mod model;
pub mod store;
pub mod tmdb;
