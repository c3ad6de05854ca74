/*!
# Solace

Solace is the engine behind a personal wellness journal: users converse with
an AI companion, conversations can be summarized into journal entries, and
entries are browsed through filtered list, calendar, and day views.

## Core Features

- Pure filter-and-sort pipeline over journal entries (search, mood, tags,
  date range, provenance, four sort orders)
- Calendar aggregation: per-day entry counts and a complete-week month grid
- Day-view selection with friendly date labels
- An entry store seam with an in-memory implementation
- A companion chat client and prompt builders for conversation replies and
  conversation-to-entry summaries

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `entry`: The journal entry data model
- `query`: The entry query engine (filtering, calendar, day views)
- `store`: Entry persistence seam and in-memory store
- `ai`: Companion chat client and prompts
- `auth`: Explicit auth context with subscribe/dispose lifecycle
- `debounce`: Debounce utility for the view-layer boundary

## Usage Example

```rust
use solace::query::{filter_entries, FilterState, SortOrder};
use chrono::Local;

let entries = vec![]; // fetched from the entry store
let filter = FilterState {
    search_term: "grateful".to_string(),
    sort: SortOrder::Oldest,
    ..FilterState::default()
};
let shown = filter_entries(&entries, &filter, Local::now());
assert!(shown.is_empty());
```
*/

/// Companion AI client and prompt builders
pub mod ai;
/// Explicit authentication context with subscribe/dispose lifecycle
pub mod auth;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// Debounce utility for the view-layer boundary
pub mod debounce;
/// Journal entry data model
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Entry query engine: filtering, calendar aggregation, day views
pub mod query;
/// Entry store seam and in-memory implementation
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::JournalEntry;
pub use errors::{AppError, AppResult};
pub use query::{filter_entries, FilterState};
