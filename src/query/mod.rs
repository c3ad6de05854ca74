//! Entry query engine: filtering and sorting over journal entries.
//!
//! This module contains the pure, synchronous filter-and-sort pipeline that
//! turns the full entry collection plus a [`FilterState`] into the ordered
//! subset shown by the list view. It performs no I/O and never mutates its
//! inputs; the reference instant ("now") is passed in explicitly so results
//! are deterministic and memoizable.
//!
//! Calendar aggregation lives in [`calendar`], day-view selection in [`day`].

pub mod calendar;
pub mod day;

use crate::constants::{MONTH_RANGE_MONTHS, THREE_MONTHS_RANGE_MONTHS, WEEK_RANGE_DAYS};
use crate::entry::JournalEntry;
use chrono::{DateTime, Duration, Local, Months, NaiveTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mood criterion for the list view.
///
/// The source of truth for moods is a closed, emoji-prefixed label set
/// chosen from a picker, so matching is exact and case-sensitive (search,
/// in contrast, case-folds). Serialized as the label itself, with `"all"`
/// as the wire sentinel for no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoodFilter {
    /// No mood constraint.
    #[default]
    All,
    /// Keep only entries whose mood equals this label exactly.
    Only(String),
}

impl From<String> for MoodFilter {
    fn from(s: String) -> Self {
        if s == "all" {
            MoodFilter::All
        } else {
            MoodFilter::Only(s)
        }
    }
}

impl From<MoodFilter> for String {
    fn from(m: MoodFilter) -> Self {
        match m {
            MoodFilter::All => "all".to_string(),
            MoodFilter::Only(label) => label,
        }
    }
}

/// Date window applied to `created_at`, relative to a reference instant.
///
/// `All` is the explicit no-constraint variant; there is no silent fallback
/// for unknown values because unknown values are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// All time.
    #[default]
    All,
    /// Since the start of the current local calendar day.
    Today,
    /// The past 7 days.
    Week,
    /// The past calendar month.
    Month,
    /// The past three calendar months.
    #[serde(rename = "3months")]
    ThreeMonths,
}

impl DateRange {
    /// Computes the inclusive cutoff for this range relative to `now`.
    ///
    /// Returns `None` when the range imposes no cutoff: for `All`, when
    /// calendar-month subtraction underflows, or when the local midnight is
    /// skipped by a timezone transition. In those cases the date stage is an
    /// identity pass rather than an error.
    pub fn cutoff(&self, now: DateTime<Local>) -> Option<DateTime<Utc>> {
        let local = match self {
            DateRange::All => None,
            DateRange::Today => now
                .date_naive()
                .and_time(NaiveTime::MIN)
                .and_local_timezone(Local)
                .earliest(),
            DateRange::Week => Some(now - Duration::days(WEEK_RANGE_DAYS)),
            DateRange::Month => now.checked_sub_months(Months::new(MONTH_RANGE_MONTHS)),
            DateRange::ThreeMonths => {
                now.checked_sub_months(Months::new(THREE_MONTHS_RANGE_MONTHS))
            }
        };
        local.map(|dt| dt.with_timezone(&Utc))
    }
}

/// Ordering applied to the surviving entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Descending `created_at`.
    #[default]
    Newest,
    /// Ascending `created_at`.
    Oldest,
    /// Descending content length (characters).
    Longest,
    /// Ascending content length (characters).
    Shortest,
}

impl SortOrder {
    /// Reorders `entries` in place. The sort is stable: ties keep their
    /// original relative order.
    fn apply(&self, entries: &mut [JournalEntry]) {
        match self {
            SortOrder::Newest => entries.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => entries.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Longest => entries.sort_by(|a, b| b.content_chars().cmp(&a.content_chars())),
            SortOrder::Shortest => {
                entries.sort_by(|a, b| a.content_chars().cmp(&b.content_chars()))
            }
        }
    }
}

/// Entry provenance criterion: auto-generated from chat vs manually written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    /// Both kinds.
    #[default]
    All,
    /// Only entries with a source conversation.
    Auto,
    /// Only manually authored entries.
    Manual,
}

/// The combined search/mood/tag/date/sort criteria driving the list view.
///
/// `Default` yields the all-pass state: empty search, no mood or tag
/// constraint, all time, newest first.
///
/// # Examples
///
/// ```
/// use solace::query::FilterState;
///
/// let mut filter = FilterState::default();
/// assert!(!filter.is_active());
///
/// filter.search_term = "anxious".to_string();
/// assert!(filter.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Case-insensitive substring match over content and tags.
    pub search_term: String,
    /// Exact mood constraint.
    pub mood: MoodFilter,
    /// Tag selection; empty means unconstrained, non-empty uses OR semantics.
    pub tags: Vec<String>,
    /// Date window on `created_at`.
    pub date_range: DateRange,
    /// Result ordering.
    pub sort: SortOrder,
    /// Provenance constraint (auto-generated vs manual).
    pub source: SourceFilter,
}

impl FilterState {
    /// Returns true iff any field deviates from its default.
    pub fn is_active(&self) -> bool {
        !self.search_term.trim().is_empty()
            || self.mood != MoodFilter::All
            || !self.tags.is_empty()
            || self.date_range != DateRange::All
            || self.sort != SortOrder::Newest
            || self.source != SourceFilter::All
    }
}

/// Applies `filter` to `entries` and returns the ordered subset to display.
///
/// Stages run in sequence: search, mood, tags, provenance, date range, sort.
/// Each stage narrows or reorders the previous stage's result; all are pure.
/// The input slice is never mutated and a fresh vector is always returned.
/// `now` anchors the relative date ranges; pass `Local::now()` outside of
/// tests.
///
/// # Examples
///
/// ```
/// use solace::query::{filter_entries, FilterState};
/// use chrono::Local;
///
/// let filter = FilterState {
///     search_term: "anxious".to_string(),
///     ..FilterState::default()
/// };
/// let shown = filter_entries(&[], &filter, Local::now());
/// assert!(shown.is_empty());
/// ```
pub fn filter_entries(
    entries: &[JournalEntry],
    filter: &FilterState,
    now: DateTime<Local>,
) -> Vec<JournalEntry> {
    let mut filtered: Vec<JournalEntry> = entries.to_vec();

    let term = filter.search_term.trim().to_lowercase();
    if !term.is_empty() {
        filtered.retain(|entry| {
            entry.content.to_lowercase().contains(&term)
                || entry.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
        });
    }

    if let MoodFilter::Only(mood) = &filter.mood {
        filtered.retain(|entry| entry.mood.as_deref() == Some(mood.as_str()));
    }

    if !filter.tags.is_empty() {
        filtered.retain(|entry| {
            entry
                .tags
                .iter()
                .any(|tag| filter.tags.iter().any(|selected| selected == tag))
        });
    }

    match filter.source {
        SourceFilter::All => {}
        SourceFilter::Auto => filtered.retain(JournalEntry::is_auto_generated),
        SourceFilter::Manual => filtered.retain(|entry| !entry.is_auto_generated()),
    }

    if let Some(cutoff) = filter.date_range.cutoff(now) {
        filtered.retain(|entry| entry.created_at >= cutoff);
    }

    filter.sort.apply(&mut filtered);

    debug!(
        total = entries.len(),
        shown = filtered.len(),
        "Filtered journal entries"
    );
    filtered
}

/// Collects the non-empty mood labels present across `entries`, deduped,
/// in first-seen order. Feeds the mood select in the filter panel.
pub fn distinct_moods(entries: &[JournalEntry]) -> Vec<String> {
    let mut moods: Vec<String> = Vec::new();
    for entry in entries {
        if let Some(mood) = &entry.mood {
            if !mood.is_empty() && !moods.iter().any(|m| m == mood) {
                moods.push(mood.clone());
            }
        }
    }
    moods
}

/// Collects every tag present across `entries`, flattened and deduped,
/// in first-seen order. Feeds the tag badges in the filter panel.
pub fn distinct_tags(entries: &[JournalEntry]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for entry in entries {
        for tag in &entry.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}


#[cfg(test)]
mod tests {
    use super::test_support::{entry_at, ts};
    use super::*;

    fn fixed_now() -> DateTime<Local> {
        ts("2024-01-15T12:00:00Z").with_timezone(&Local)
    }

    fn sample_entries() -> Vec<JournalEntry> {
        vec![
            entry_at(
                "e1",
                "Great day!",
                Some("😊 Great"),
                &["happy"],
                ts("2024-01-10T09:00:00Z"),
            ),
            entry_at(
                "e2",
                "Tough day, feeling anxious and overwhelmed",
                Some("😰 Anxious"),
                &["anxious", "overwhelmed"],
                ts("2024-01-05T18:00:00Z"),
            ),
            entry_at(
                "e3",
                "Quiet evening walk",
                None,
                &["walk", "family"],
                ts("2024-01-12T20:00:00Z"),
            ),
        ]
    }

    #[test]
    fn test_default_filter_sorts_newest_first() {
        let entries = sample_entries();
        let shown = filter_entries(&entries, &FilterState::default(), fixed_now());
        let ids: Vec<_> = shown.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e3", "e1", "e2"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let entries = vec![entry_at(
            "e1",
            "I feel ANXIOUS today",
            None,
            &[],
            ts("2024-01-10T09:00:00Z"),
        )];
        let filter = FilterState {
            search_term: "anxious".to_string(),
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, fixed_now());
        assert_eq!(shown.len(), 1);
    }

    #[test]
    fn test_search_matches_tags_too() {
        let entries = sample_entries();
        let filter = FilterState {
            search_term: "overwhel".to_string(),
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, fixed_now());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "e2");
    }

    #[test]
    fn test_search_trims_whitespace() {
        let entries = sample_entries();
        let filter = FilterState {
            search_term: "   ".to_string(),
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, fixed_now());
        assert_eq!(shown.len(), 3);
    }

    #[test]
    fn test_mood_match_is_exact_and_case_sensitive() {
        let entries = sample_entries();

        let filter = FilterState {
            mood: MoodFilter::Only("😊 Great".to_string()),
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, fixed_now());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "e1");

        // Case differs: no match
        let filter = FilterState {
            mood: MoodFilter::Only("😊 great".to_string()),
            ..FilterState::default()
        };
        assert!(filter_entries(&entries, &filter, fixed_now()).is_empty());
    }

    #[test]
    fn test_missing_mood_is_not_an_error() {
        let entries = sample_entries();
        let filter = FilterState {
            mood: MoodFilter::Only("😰 Anxious".to_string()),
            ..FilterState::default()
        };
        // e3 has no mood; it is simply filtered out
        let shown = filter_entries(&entries, &filter, fixed_now());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "e2");
    }

    #[test]
    fn test_tag_filter_uses_or_semantics() {
        let entries = vec![
            entry_at("e1", "work notes", None, &["work"], ts("2024-01-10T09:00:00Z")),
            entry_at("e2", "family dinner", None, &["family"], ts("2024-01-11T09:00:00Z")),
            entry_at("e3", "untagged", None, &[], ts("2024-01-12T09:00:00Z")),
        ];
        let filter = FilterState {
            tags: vec!["work".to_string(), "family".to_string()],
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, fixed_now());
        let ids: Vec<_> = shown.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1"]);
    }

    #[test]
    fn test_week_cutoff_boundary() {
        let now = fixed_now();
        let entries = vec![
            // Exactly 7 days minus 1 second before now: excluded
            entry_at(
                "too-old",
                "just outside",
                None,
                &[],
                (now - Duration::days(7) - Duration::seconds(1)).with_timezone(&Utc),
            ),
            // 6 days ago: included
            entry_at(
                "recent",
                "inside the window",
                None,
                &[],
                (now - Duration::days(6)).with_timezone(&Utc),
            ),
        ];
        let filter = FilterState {
            date_range: DateRange::Week,
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, now);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "recent");
    }

    #[test]
    fn test_today_cutoff_is_start_of_local_day() {
        let now = fixed_now();
        let cutoff = DateRange::Today.cutoff(now).unwrap();
        let local_cutoff = cutoff.with_timezone(&Local);
        assert_eq!(local_cutoff.date_naive(), now.date_naive());
        assert_eq!(local_cutoff.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_month_ranges_use_calendar_months() {
        let now = ts("2024-03-31T12:00:00Z").with_timezone(&Local);
        // March 31 minus one calendar month clamps to February 29 (leap year)
        let cutoff = DateRange::Month.cutoff(now).unwrap().with_timezone(&Local);
        assert_eq!(cutoff.date_naive().to_string(), "2024-02-29");

        let cutoff = DateRange::ThreeMonths
            .cutoff(now)
            .unwrap()
            .with_timezone(&Local);
        assert_eq!(cutoff.date_naive().to_string(), "2023-12-31");
    }

    #[test]
    fn test_sort_orders() {
        let entries = vec![
            entry_at("short", "ab", None, &[], ts("2024-01-10T09:00:00Z")),
            entry_at("long", "abcdef", None, &[], ts("2024-01-11T09:00:00Z")),
            entry_at("mid", "abcd", None, &[], ts("2024-01-12T09:00:00Z")),
        ];

        let pick = |sort: SortOrder| {
            let filter = FilterState {
                sort,
                ..FilterState::default()
            };
            filter_entries(&entries, &filter, fixed_now())
                .iter()
                .map(|e| e.id.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(pick(SortOrder::Newest), vec!["mid", "long", "short"]);
        assert_eq!(pick(SortOrder::Oldest), vec!["short", "long", "mid"]);
        assert_eq!(pick(SortOrder::Longest), vec!["long", "mid", "short"]);
        assert_eq!(pick(SortOrder::Shortest), vec!["short", "mid", "long"]);
    }

    #[test]
    fn test_sort_is_stable_under_ties() {
        let entries = vec![
            entry_at("first", "same", None, &[], ts("2024-01-10T09:00:00Z")),
            entry_at("second", "same", None, &[], ts("2024-01-11T09:00:00Z")),
        ];
        let filter = FilterState {
            sort: SortOrder::Longest,
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, fixed_now());
        let ids: Vec<_> = shown.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }

    #[test]
    fn test_source_filter() {
        let mut entries = sample_entries();
        entries[0].conversation_id = Some("conv-1".to_string());

        let filter = FilterState {
            source: SourceFilter::Auto,
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, fixed_now());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "e1");

        let filter = FilterState {
            source: SourceFilter::Manual,
            ..FilterState::default()
        };
        assert_eq!(filter_entries(&entries, &filter, fixed_now()).len(), 2);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let entries = sample_entries();
        let filter = FilterState {
            search_term: "day".to_string(),
            sort: SortOrder::Oldest,
            ..FilterState::default()
        };
        let once = filter_entries(&entries, &filter, fixed_now());
        let twice = filter_entries(&once, &filter, fixed_now());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_inputs_are_never_mutated() {
        let entries = sample_entries();
        let snapshot = entries.clone();
        let filter = FilterState {
            search_term: "anxious".to_string(),
            sort: SortOrder::Shortest,
            date_range: DateRange::ThreeMonths,
            ..FilterState::default()
        };
        let _ = filter_entries(&entries, &filter, fixed_now());
        assert_eq!(entries, snapshot);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let shown = filter_entries(&[], &FilterState::default(), fixed_now());
        assert!(shown.is_empty());
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterState::default().is_active());

        let cases = vec![
            FilterState {
                search_term: "x".to_string(),
                ..FilterState::default()
            },
            FilterState {
                mood: MoodFilter::Only("😊 Great".to_string()),
                ..FilterState::default()
            },
            FilterState {
                tags: vec!["work".to_string()],
                ..FilterState::default()
            },
            FilterState {
                date_range: DateRange::Week,
                ..FilterState::default()
            },
            FilterState {
                sort: SortOrder::Oldest,
                ..FilterState::default()
            },
            FilterState {
                source: SourceFilter::Manual,
                ..FilterState::default()
            },
        ];
        for filter in cases {
            assert!(filter.is_active(), "expected active: {:?}", filter);
        }
    }

    #[test]
    fn test_distinct_moods_skips_absent_and_dedupes() {
        let entries = vec![
            entry_at("e1", "a", Some("😊 Great"), &[], ts("2024-01-10T09:00:00Z")),
            entry_at("e2", "b", None, &[], ts("2024-01-11T09:00:00Z")),
            entry_at("e3", "c", Some("😊 Great"), &[], ts("2024-01-12T09:00:00Z")),
            entry_at("e4", "d", Some("😰 Anxious"), &[], ts("2024-01-13T09:00:00Z")),
        ];
        assert_eq!(distinct_moods(&entries), vec!["😊 Great", "😰 Anxious"]);
    }

    #[test]
    fn test_distinct_tags_flattens_and_dedupes() {
        let entries = vec![
            entry_at("e1", "a", None, &["work", "focus"], ts("2024-01-10T09:00:00Z")),
            entry_at("e2", "b", None, &["family", "work"], ts("2024-01-11T09:00:00Z")),
        ];
        assert_eq!(distinct_tags(&entries), vec!["work", "focus", "family"]);
    }

    #[test]
    fn test_mood_filter_wire_format() {
        let all: MoodFilter = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(all, MoodFilter::All);

        let only: MoodFilter = serde_json::from_str(r#""😊 Great""#).unwrap();
        assert_eq!(only, MoodFilter::Only("😊 Great".to_string()));

        assert_eq!(serde_json::to_string(&MoodFilter::All).unwrap(), r#""all""#);
    }

    #[test]
    fn test_date_range_wire_format() {
        let range: DateRange = serde_json::from_str(r#""3months""#).unwrap();
        assert_eq!(range, DateRange::ThreeMonths);
        assert!(serde_json::from_str::<DateRange>(r#""fortnight""#).is_err());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let entries = sample_entries();
        let filter = FilterState {
            search_term: "anxious".to_string(),
            ..FilterState::default()
        };
        let shown = filter_entries(&entries, &filter, fixed_now());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, "e2");
    }
}
