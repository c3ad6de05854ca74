//! Command-line interface for parsing and handling user arguments.

use crate::constants;
use crate::query::calendar::MonthRef;
use crate::query::{DateRange, FilterState, MoodFilter, SortOrder, SourceFilter};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// A wellness journal browser with filtering and calendar views
#[derive(Parser, Debug)]
#[clap(name = "solace", about = "A wellness journal browser with filtering and calendar views")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Path to a JSON export of journal entries
    #[clap(short = 'f', long)]
    pub file: PathBuf,

    /// User whose entries to browse (defaults to the export's first entry owner)
    #[clap(short = 'u', long)]
    pub user: Option<String>,

    /// Search term matched against content and tags (case-insensitive)
    #[clap(short = 's', long, default_value = "")]
    pub search: String,

    /// Exact mood label to filter by (e.g. "😊 Great")
    #[clap(long)]
    pub mood: Option<String>,

    /// Tag to filter by; repeatable, any match qualifies
    #[clap(short = 't', long = "tag")]
    pub tags: Vec<String>,

    /// Date range on creation time
    #[clap(long, value_enum, default_value_t = DateRange::All)]
    pub range: DateRange,

    /// Sort order for the list view
    #[clap(long, value_enum, default_value_t = SortOrder::Newest)]
    pub sort: SortOrder,

    /// Entry provenance: auto-generated from chat vs manual
    #[clap(long, value_enum, default_value_t = SourceFilter::All)]
    pub source: SourceFilter,

    /// Show the calendar for a month (format: YYYY-MM) instead of the list
    #[clap(short = 'c', long, conflicts_with = "day")]
    pub calendar: Option<String>,

    /// Show entries for a single day (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(short = 'd', long)]
    pub day: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Builds the engine filter state from the list-view flags.
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            search_term: self.search.clone(),
            mood: match &self.mood {
                Some(label) => MoodFilter::Only(label.clone()),
                None => MoodFilter::All,
            },
            tags: self.tags.clone(),
            date_range: self.range,
            sort: self.sort,
            source: self.source,
        }
    }

    /// Parses the selected day, if given, in ISO or compact format.
    pub fn parse_day(&self) -> Option<Result<NaiveDate, chrono::ParseError>> {
        self.day.as_ref().map(|date_str| {
            NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_ISO)
                .or_else(|_| NaiveDate::parse_from_str(date_str, constants::DATE_FORMAT_COMPACT))
        })
    }

    /// Parses the selected calendar month ("YYYY-MM"), if given.
    pub fn parse_month(&self) -> Option<Result<MonthRef, String>> {
        self.calendar.as_ref().map(|month_str| {
            let (year, month) = month_str
                .split_once('-')
                .ok_or_else(|| format!("'{}' is not in YYYY-MM format", month_str))?;
            let year: i32 = year
                .parse()
                .map_err(|_| format!("'{}' is not a valid year", year))?;
            let month: u32 = month
                .parse()
                .map_err(|_| format!("'{}' is not a valid month", month))?;
            MonthRef::new(year, month).ok_or_else(|| format!("'{}' is out of range", month_str))
        })
    }
}
