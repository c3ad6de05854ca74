//! Configuration management for the solace application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It covers the companion
//! API endpoint, credentials, and model selection.
//!
//! # Environment Variables
//!
//! - `SOLACE_API_URL`: Base URL of the chat-completions API (defaults to
//!   https://api.openai.com)
//! - `SOLACE_API_KEY`: Bearer token for the API (empty if unset; required
//!   only for companion operations)
//! - `SOLACE_CHAT_MODEL`: Chat model name (defaults to "gpt-4.1-nano")

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_CHAT_MODEL, ENV_VAR_API_KEY, ENV_VAR_API_URL, ENV_VAR_CHAT_MODEL,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;

/// Configuration for the solace application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use solace::Config;
///
/// let config = Config {
///     api_url: "https://api.openai.com".to_string(),
///     api_key: "sk-test".to_string(),
///     chat_model: "gpt-4.1-nano".to_string(),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Base URL of the companion chat-completions API.
    pub api_url: String,

    /// Bearer token for the API. May be empty when only the query engine
    /// and store are used; companion calls will fail upstream without it.
    pub api_key: String,

    /// Chat model used for companion replies and entry summaries.
    pub chat_model: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("api_key", &REDACTED_PLACEHOLDER)
            .field("chat_model", &self.chat_model)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with defaults.
    ///
    /// A trailing slash on the API URL is stripped so request paths can be
    /// joined uniformly.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the resulting configuration fails
    /// validation.
    pub fn load() -> AppResult<Self> {
        let api_url = env::var(ENV_VAR_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/').to_string();

        let api_key = env::var(ENV_VAR_API_KEY).unwrap_or_default();

        let chat_model =
            env::var(ENV_VAR_CHAT_MODEL).unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        let config = Config {
            api_url,
            api_key,
            chat_model,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The API URL is empty or not an http(s) URL
    /// - The chat model name is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.api_url.is_empty() {
            return Err(AppError::Config("API URL is empty".to_string()));
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }
        if self.chat_model.is_empty() {
            return Err(AppError::Config("Chat model name is empty".to_string()));
        }
        Ok(())
    }
}
