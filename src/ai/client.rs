//! HTTP client for the hosted chat-completions API.
//!
//! This module provides a simple blocking client against an OpenAI-compatible
//! `/v1/chat/completions` endpoint, used for companion replies and journal
//! entry summaries.

use crate::config::Config;
use crate::constants::{CHAT_MAX_TOKENS, CHAT_TEMPERATURE};
use crate::errors::{AiError, AppResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl ChatMessage {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

/// One completion choice in the API response.
#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Client for the companion chat-completions API.
pub struct CompanionClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl CompanionClient {
    /// Creates a new companion client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://api.openai.com")
    /// * `api_key` - Bearer token for authentication
    /// * `model` - Chat model name (e.g., "gpt-4.1-nano")
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: Client::new(),
        }
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_url.as_str(),
            config.api_key.as_str(),
            config.chat_model.as_str(),
        )
    }

    /// Sends a chat completion request and returns the assistant's reply.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API is not reachable
    /// - The API returns a non-success status (bad key, unknown model)
    /// - The response body cannot be parsed or contains no choices
    pub fn chat(&self, messages: &[ChatMessage]) -> AppResult<String> {
        debug!(model = %self.model, count = messages.len(), "Sending chat request");

        let url = format!("{}/v1/chat/completions", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            temperature: CHAT_TEMPERATURE,
            max_tokens: CHAT_MAX_TOKENS,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(AiError::Unreachable)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(AiError::Api { status, body }.into());
        }

        let chat_response: ChatResponse = response.json().map_err(|e| {
            AiError::InvalidResponse(format!("Failed to parse chat response: {}", e))
        })?;

        let reply = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AiError::InvalidResponse("Response contained no choices".to_string()))?;

        debug!("Received chat response");
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let system = ChatMessage::system("You are a wellness companion");
        assert_eq!(system.role, "system");
        assert_eq!(system.content, "You are a wellness companion");

        let user = ChatMessage::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Hello");

        let assistant = ChatMessage::assistant("Hi there!");
        assert_eq!(assistant.role, "assistant");
        assert_eq!(assistant.content, "Hi there!");
    }

    #[test]
    fn test_client_creation() {
        let client = CompanionClient::new("https://api.openai.com", "sk-test", "gpt-4.1-nano");
        assert_eq!(client.base_url, "https://api.openai.com");
        assert_eq!(client.model, "gpt-4.1-nano");
    }
}
