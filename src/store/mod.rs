//! Entry store: persistence collaborator for journal entries.
//!
//! The query engine only ever consumes the list; creation, updates, and
//! deletion go through the [`EntryStore`] trait. The hosted backend sits
//! behind this seam in production; [`MemoryStore`] is the in-process
//! implementation used by the CLI and tests.

use crate::constants::MAX_CONTENT_CHARS;
use crate::entry::{EntryPatch, JournalEntry, NewEntry};
use crate::errors::{AppResult, StoreError};
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

/// CRUD surface for journal entries, scoped to the owning user.
///
/// Every call takes the requesting `user_id`; an entry belonging to another
/// user behaves exactly like one that does not exist.
pub trait EntryStore {
    /// Lists the user's entries, newest first.
    fn list_entries(&self, user_id: &str) -> AppResult<Vec<JournalEntry>>;

    /// Creates an entry and returns it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidContent` if the content is empty or
    /// exceeds the creation-time character cap.
    fn create_entry(&mut self, user_id: &str, new: NewEntry) -> AppResult<JournalEntry>;

    /// Replaces an entry's content, mood, and tags, bumping `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry with this id belongs to
    /// the user, `StoreError::InvalidContent` on empty content.
    fn update_entry(&mut self, user_id: &str, id: &str, patch: EntryPatch)
        -> AppResult<JournalEntry>;

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no entry with this id belongs to
    /// the user.
    fn delete_entry(&mut self, user_id: &str, id: &str) -> AppResult<()>;
}

/// In-memory entry store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<JournalEntry>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing entries, e.g. from a JSON export.
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        MemoryStore { entries }
    }

    /// Total number of entries across all users.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validates content shared by create and update paths.
fn validate_content(content: &str) -> Result<(), StoreError> {
    if content.trim().is_empty() {
        return Err(StoreError::InvalidContent(
            "Content is required".to_string(),
        ));
    }
    let chars = content.chars().count();
    if chars > MAX_CONTENT_CHARS {
        return Err(StoreError::InvalidContent(format!(
            "Content is {} characters; the limit is {}",
            chars, MAX_CONTENT_CHARS
        )));
    }
    Ok(())
}

/// Normalizes a mood field: empty strings mean "no mood recorded".
fn normalize_mood(mood: Option<String>) -> Option<String> {
    mood.filter(|m| !m.is_empty())
}

/// Dedupes tags preserving first-seen order.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

impl EntryStore for MemoryStore {
    fn list_entries(&self, user_id: &str) -> AppResult<Vec<JournalEntry>> {
        let mut entries: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(user_id, count = entries.len(), "Listed journal entries");
        Ok(entries)
    }

    fn create_entry(&mut self, user_id: &str, new: NewEntry) -> AppResult<JournalEntry> {
        validate_content(&new.content)?;

        let now = Utc::now();
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            content: new.content,
            mood: normalize_mood(new.mood),
            tags: normalize_tags(new.tags),
            conversation_id: new.conversation_id,
            created_at: now,
            updated_at: now,
        };
        debug!(user_id, id = %entry.id, "Created journal entry");
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn update_entry(
        &mut self,
        user_id: &str,
        id: &str,
        patch: EntryPatch,
    ) -> AppResult<JournalEntry> {
        validate_content(&patch.content)?;

        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id && entry.user_id == user_id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        entry.content = patch.content;
        entry.mood = normalize_mood(patch.mood);
        entry.tags = normalize_tags(patch.tags);
        entry.updated_at = Utc::now();
        debug!(user_id, id, "Updated journal entry");
        Ok(entry.clone())
    }

    fn delete_entry(&mut self, user_id: &str, id: &str) -> AppResult<()> {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !(entry.id == id && entry.user_id == user_id));
        if self.entries.len() == before {
            return Err(StoreError::NotFound(id.to_string()).into());
        }
        debug!(user_id, id, "Deleted journal entry");
        Ok(())
    }
}
