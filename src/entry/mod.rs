//! Journal entry data model.
//!
//! This module defines the `JournalEntry` record consumed by the query
//! engine, along with the `NewEntry` and `EntryPatch` shapes accepted by the
//! entry store for creation and updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single journal record, manual or auto-generated from a conversation.
///
/// Entries are treated as immutable values once fetched; the query engine
/// only ever reads them, and mutation happens through explicit store calls.
///
/// # Examples
///
/// ```
/// use solace::entry::JournalEntry;
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let entry = JournalEntry {
///     id: "e1".to_string(),
///     user_id: "u1".to_string(),
///     content: "Slept well, feeling rested.".to_string(),
///     mood: Some("😌 Peaceful".to_string()),
///     tags: vec!["sleep".to_string()],
///     conversation_id: None,
///     created_at: now,
///     updated_at: now,
/// };
/// assert!(!entry.is_auto_generated());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Opaque unique identifier.
    pub id: String,
    /// Owner identifier; every entry belongs to exactly one user.
    pub user_id: String,
    /// Free text, capped at creation time (see `constants::MAX_CONTENT_CHARS`).
    pub content: String,
    /// Optional short mood label (e.g. "😊 Great"); `None` means no mood recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Lowercase short tags; order preserved for display, deduped by the writer.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Back-reference to a source conversation; presence marks the entry
    /// as auto-generated from chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp; always >= `created_at`.
    pub updated_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Returns true if this entry was generated from a chat conversation.
    pub fn is_auto_generated(&self) -> bool {
        self.conversation_id.is_some()
    }

    /// Length of the entry content in characters (not bytes).
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// Fields accepted when creating an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEntry {
    /// Entry text; required and non-empty.
    pub content: String,
    /// Optional mood label.
    #[serde(default)]
    pub mood: Option<String>,
    /// Tags; defaults to empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source conversation, when summarizing a chat into an entry.
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Fields accepted when updating an entry.
///
/// The update replaces content, mood, and tags wholesale, mirroring the
/// entry editor which always submits the full form. `mood: None` clears a
/// previously recorded mood.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    /// Replacement entry text; required and non-empty.
    pub content: String,
    /// Replacement mood label, or `None` to clear it.
    #[serde(default)]
    pub mood: Option<String>,
    /// Replacement tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> JournalEntry {
        let ts = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        JournalEntry {
            id: "e1".to_string(),
            user_id: "u1".to_string(),
            content: "Great day!".to_string(),
            mood: Some("😊 Great".to_string()),
            tags: vec!["happy".to_string()],
            conversation_id: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_is_auto_generated() {
        let mut entry = sample_entry();
        assert!(!entry.is_auto_generated());

        entry.conversation_id = Some("conv-1".to_string());
        assert!(entry.is_auto_generated());
    }

    #[test]
    fn test_content_chars_counts_characters_not_bytes() {
        let mut entry = sample_entry();
        entry.content = "héllo".to_string();
        assert_eq!(entry.content_chars(), 5);
        assert!(entry.content.len() > 5); // bytes
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let entry = sample_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_entry_deserializes_with_missing_optional_fields() {
        let json = r#"{
            "id": "e2",
            "user_id": "u1",
            "content": "minimal",
            "created_at": "2024-01-05T18:00:00Z",
            "updated_at": "2024-01-05T18:00:00Z"
        }"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert!(entry.mood.is_none());
        assert!(entry.tags.is_empty());
        assert!(entry.conversation_id.is_none());
    }
}
