//! Companion AI integration.
//!
//! This module provides the HTTP client for the hosted chat-completions API
//! and the prompt builders for the two AI-powered operations: companion
//! conversation replies and conversation-to-entry summarization.

pub mod client;
pub mod prompts;

pub use client::{ChatMessage, CompanionClient};
