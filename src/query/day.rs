//! Day-view selection: the entries for one selected calendar day.

use crate::constants::DAY_LABEL_FORMAT;
use crate::entry::JournalEntry;
use crate::query::calendar::date_key;
use chrono::{Duration, NaiveDate};

/// Returns the entries created on `date` (local calendar day), newest first.
///
/// # Examples
///
/// ```
/// use solace::query::day::entries_on;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
/// assert!(entries_on(&[], date).is_empty());
/// ```
pub fn entries_on(entries: &[JournalEntry], date: NaiveDate) -> Vec<JournalEntry> {
    let mut selected: Vec<JournalEntry> = entries
        .iter()
        .filter(|entry| date_key(entry) == date)
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selected
}

/// Descriptive label for a selected day: "Today", "Yesterday", or the
/// long-form date ("Monday, January 15, 2024").
///
/// `today` is the reference day; pass `Local::now().date_naive()` outside
/// of tests.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today - Duration::days(1) {
        "Yesterday".to_string()
    } else {
        date.format(DAY_LABEL_FORMAT).to_string()
    }
}
