//! Error handling utilities for the solace crate.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents errors that can occur when interacting with the entry store.
///
/// The store enforces ownership scoping and creation-time validation; the
/// query engine itself never produces these.
///
/// # Examples
///
/// ```
/// use solace::errors::StoreError;
///
/// let error = StoreError::NotFound("abc123".to_string());
/// assert!(format!("{}", error).contains("abc123"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry with the given id exists for the requesting user.
    #[error("Journal entry '{0}' not found")]
    NotFound(String),

    /// Entry content failed creation-time validation.
    #[error("Invalid entry content: {0}")]
    InvalidContent(String),
}

/// Represents errors that can occur when talking to the companion AI API.
///
/// # Examples
///
/// ```
/// use solace::errors::AiError;
///
/// let error = AiError::InvalidResponse("missing choices".to_string());
/// assert!(format!("{}", error).contains("missing choices"));
/// ```
#[derive(Debug, Error)]
pub enum AiError {
    /// The API endpoint could not be reached.
    #[error("Companion API is not reachable: {0}. Check your network connection and SOLACE_API_URL.")]
    Unreachable(#[source] reqwest::Error),

    /// The API rejected the request (bad key, unknown model, rate limit).
    #[error("Companion API returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// The API responded but the body could not be interpreted.
    #[error("Invalid response from companion API: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the solace crate.
///
/// This enum is the central error type used across the application, with
/// variants for different error categories. It uses `thiserror` for deriving
/// the `Error` trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use solace::errors::AppError;
///
/// let error = AppError::Config("Missing API key".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing API key");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors from the entry store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from the companion AI client.
    #[error("AI error: {0}")]
    Ai(#[from] AiError),

    /// Errors reading or parsing an entries export file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors deserializing JSON data.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors parsing user-supplied dates.
    #[error("Invalid date: {0}")]
    DateParse(String),
}

/// A specialized Result type for solace operations.
///
/// This type alias simplifies function signatures throughout the application
/// by defaulting the error type to `AppError`.
pub type AppResult<T> = Result<T, AppError>;
