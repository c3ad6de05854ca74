//! System prompts and message builders for AI interactions.
//!
//! This module provides the pre-defined prompts and utilities for
//! constructing messages for the two AI-powered operations: companion chat
//! replies and summarizing a conversation into a journal entry.

use super::client::ChatMessage;
use crate::constants::CONTEXT_SNIPPET_CHARS;
use crate::entry::JournalEntry;

/// System prompt for companion conversations.
///
/// Establishes the AI's role as a supportive wellness companion focused on
/// validation, reflection, and healthy coping, with explicit boundaries
/// around professional care.
pub const COMPANION_SYSTEM_PROMPT: &str = r#"You are a compassionate and supportive wellness companion. Your role is to:

1. Validate feelings and emotions without judgment
2. Provide gentle reassurance and perspective
3. Help users process their thoughts and anxieties
4. Encourage self-reflection and emotional awareness
5. Suggest healthy coping strategies when appropriate
6. Reference patterns or progress from their previous conversations when helpful

Important guidelines:
- Always validate the user's feelings first
- Use warm, empathetic language
- Ask thoughtful follow-up questions to encourage reflection
- Remind users that seeking professional help is always an option for serious concerns
- Never diagnose or provide medical advice
- Focus on emotional support and active listening
- Encourage journaling and self-care practices
- When you notice patterns or growth from their previous entries, gently acknowledge it

Remember: You are a supportive companion, not a replacement for professional mental health care. Always encourage users to seek professional help if they're experiencing severe distress, thoughts of self-harm, or mental health crises."#;

/// System prompt for summarizing a conversation into a journal entry.
pub const SUMMARY_SYSTEM_PROMPT: &str = r#"You are a wellness journal assistant. Your task is to create a meaningful journal entry based on a conversation between a user and their wellness companion.

Guidelines:
- Extract the key emotional themes and insights from the conversation
- Write in first person as if the user is writing the entry
- Focus on feelings, thoughts, and any breakthroughs or realizations
- Keep it concise but meaningful (2-3 paragraphs max)
- Include any coping strategies or positive insights discussed
- Make it feel personal and reflective

The journal entry should capture the essence of what the user shared and any growth or insights from the conversation."#;

/// Truncates an entry to a short context snippet.
fn snippet(content: &str) -> String {
    if content.chars().count() <= CONTEXT_SNIPPET_CHARS {
        content.to_string()
    } else {
        let cut: String = content.chars().take(CONTEXT_SNIPPET_CHARS).collect();
        format!("{}...", cut)
    }
}

/// Builds messages for a companion conversation turn.
///
/// Prepends the companion system prompt, optionally augmented with dated
/// snippets of the user's recent journal entries, then replays the
/// conversation history.
///
/// # Arguments
///
/// * `history` - The conversation so far, oldest first
/// * `journal_context` - Recent entries used to personalize replies
pub fn companion_messages(
    history: &[ChatMessage],
    journal_context: &[JournalEntry],
) -> Vec<ChatMessage> {
    let mut system = COMPANION_SYSTEM_PROMPT.to_string();

    if !journal_context.is_empty() {
        let context_lines = journal_context
            .iter()
            .map(|entry| {
                format!(
                    "- {}: {}",
                    entry.created_at.format("%Y-%m-%d"),
                    snippet(&entry.content)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        system.push_str(&format!(
            "\n\nContext from user's previous journal entries:\n{}\n\nUse this context to provide more personalized support, but don't explicitly mention that you're referencing their journal unless relevant.",
            context_lines
        ));
    }

    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(system));
    messages.extend_from_slice(history);
    messages
}

/// Builds messages for summarizing a conversation into a journal entry.
///
/// # Arguments
///
/// * `conversation` - The full conversation transcript, oldest first
/// * `mood` - The user's self-reported mood, if any
pub fn summarize_messages(conversation: &[ChatMessage], mood: Option<&str>) -> Vec<ChatMessage> {
    let mut system = SUMMARY_SYSTEM_PROMPT.to_string();
    if let Some(mood) = mood {
        system.push_str(&format!("\n\nCurrent mood: {}", mood));
    }

    let transcript = conversation
        .iter()
        .map(|msg| format!("{}: {}", msg.role, msg.content))
        .collect::<Vec<_>>()
        .join("\n");

    vec![
        ChatMessage::system(system),
        ChatMessage::user(format!(
            "Create a journal entry based on this conversation:\n\n{}",
            transcript
        )),
    ]
}
