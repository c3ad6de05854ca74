//! Constants used throughout the application.
//!
//! This module contains all constants used in the Solace crate, organized
//! into logical groups. Having constants centralized makes them easier to
//! find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "solace";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A wellness journal browser with filtering and calendar views";

// Configuration Keys & Environment Variables
/// Environment variable for the companion API base URL.
pub const ENV_VAR_API_URL: &str = "SOLACE_API_URL";
/// Environment variable for the companion API key.
pub const ENV_VAR_API_KEY: &str = "SOLACE_API_KEY";
/// Environment variable for the chat model name.
pub const ENV_VAR_CHAT_MODEL: &str = "SOLACE_CHAT_MODEL";
/// Default base URL for the companion API.
pub const DEFAULT_API_URL: &str = "https://api.openai.com";
/// Default chat model used for companion replies and entry summaries.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1-nano";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Entry Validation
/// Maximum length of entry content, in characters, enforced at creation.
pub const MAX_CONTENT_CHARS: usize = 2000;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Long-form date format used by the day view label ("Monday, January 15, 2024").
pub const DAY_LABEL_FORMAT: &str = "%A, %B %-d, %Y";
/// Month header format used by the calendar view ("January 2024").
pub const MONTH_LABEL_FORMAT: &str = "%B %Y";
/// Number of days back covered by the past-week date range.
pub const WEEK_RANGE_DAYS: i64 = 7;
/// Number of months back covered by the past-month date range.
pub const MONTH_RANGE_MONTHS: u32 = 1;
/// Number of months back covered by the past-three-months date range.
pub const THREE_MONTHS_RANGE_MONTHS: u32 = 3;
/// Number of days in a calendar week row.
pub const DAYS_PER_WEEK: usize = 7;

// View Layer
/// Recommended debounce delay for search input, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
/// Truncation length for entry snippets fed to the companion as context.
pub const CONTEXT_SNIPPET_CHARS: usize = 200;

// AI Parameters
/// Sampling temperature for companion chat and summaries.
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Token cap for companion chat and summaries.
pub const CHAT_MAX_TOKENS: u32 = 500;

/// Mood labels offered by the entry editor, emoji-prefixed as stored.
pub const MOOD_OPTIONS: &[&str] = &[
    "😊 Great",
    "🙂 Good",
    "😐 Okay",
    "😔 Low",
    "😰 Anxious",
    "🙏 Grateful",
    "😴 Tired",
    "💪 Motivated",
    "🤔 Thoughtful",
    "😌 Peaceful",
];

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "solace";
