//! Calendar aggregation: date-bucketed counts and the month grid.
//!
//! Entries are bucketed by the local calendar day of their `created_at`
//! (never `updated_at`); the grid always spans complete Sunday-to-Saturday
//! weeks, including the leading and trailing days borrowed from adjacent
//! months.

use crate::constants::{DAYS_PER_WEEK, MONTH_LABEL_FORMAT};
use crate::entry::JournalEntry;
use chrono::{Datelike, Duration, Local, NaiveDate};
use std::collections::HashMap;

/// A calendar-day identifier in the viewer's local time zone.
pub type DateKey = NaiveDate;

/// Addresses one calendar page as a validated year/month pair (1-based month).
///
/// # Examples
///
/// ```
/// use solace::query::calendar::MonthRef;
///
/// let jan = MonthRef::new(2024, 1).unwrap();
/// assert_eq!(jan.label(), "January 2024");
/// assert!(MonthRef::new(2024, 13).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    year: i32,
    month: u32,
}

impl MonthRef {
    /// Creates a month reference, rejecting out-of-range months.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| MonthRef { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        MonthRef {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The 1-based month component.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // Fields validated at construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// The previous calendar month.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            MonthRef {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next calendar month.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            MonthRef {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthRef {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Human-readable month header ("January 2024").
    pub fn label(&self) -> String {
        self.first_day().format(MONTH_LABEL_FORMAT).to_string()
    }
}

/// One cell of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    /// The calendar day this cell renders.
    pub date: NaiveDate,
    /// Whether the day belongs to the target month (vs a leading/trailing
    /// day completing a week row).
    pub in_month: bool,
    /// Whether the day is the reference "today".
    pub is_today: bool,
    /// Number of entries created on this day.
    pub entry_count: usize,
}

/// A fully aggregated calendar page.
#[derive(Debug, Clone)]
pub struct MonthView {
    /// The month this view renders.
    pub month: MonthRef,
    /// Complete-week grid of cells, Sunday-start, in chronological order.
    pub grid: Vec<CalendarCell>,
    /// Entry counts for every day that has at least one entry, month or not.
    pub counts: HashMap<DateKey, usize>,
}

/// Returns the local calendar day an entry is bucketed under.
pub fn date_key(entry: &JournalEntry) -> DateKey {
    entry.created_at.with_timezone(&Local).date_naive()
}

/// Counts entries per local calendar day of `created_at`.
///
/// Days with no entries are absent from the map; the grid reports those as
/// zero.
pub fn counts_by_date(entries: &[JournalEntry]) -> HashMap<DateKey, usize> {
    let mut counts: HashMap<DateKey, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(date_key(entry)).or_insert(0) += 1;
    }
    counts
}

/// Builds the calendar page for `month`.
///
/// The grid starts on the Sunday on or before the 1st and ends on the
/// Saturday on or after the last day, so its length is always a multiple of
/// seven. `today` is the reference day for the `is_today` flag; pass
/// `Local::now().date_naive()` outside of tests. Aside from that flag, the
/// output is a pure function of `(entries, month)`.
///
/// # Examples
///
/// ```
/// use solace::query::calendar::{month_view, MonthRef};
/// use chrono::NaiveDate;
///
/// let month = MonthRef::new(2024, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let view = month_view(&[], month, today);
/// assert_eq!(view.grid.len() % 7, 0);
/// ```
pub fn month_view(entries: &[JournalEntry], month: MonthRef, today: NaiveDate) -> MonthView {
    let counts = counts_by_date(entries);

    let first = month.first_day();
    let last = month.last_day();
    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let end = last
        + Duration::days(i64::from(
            (DAYS_PER_WEEK as u32 - 1) - last.weekday().num_days_from_sunday(),
        ));

    let mut grid = Vec::with_capacity(DAYS_PER_WEEK * 6);
    let mut date = start;
    while date <= end {
        grid.push(CalendarCell {
            date,
            in_month: date.year() == month.year && date.month() == month.month,
            is_today: date == today,
            entry_count: counts.get(&date).copied().unwrap_or(0),
        });
        date += Duration::days(1);
    }

    MonthView {
        month,
        grid,
        counts,
    }
}
