/*!
# Solace - Wellness Journal Browser

Solace is a command-line browser for a wellness journal export. It applies
the entry query engine to a JSON export of journal entries and renders a
filtered list, a month calendar, or a single day's entries.

## Usage

```text
solace --file entries.json [OPTIONS]

Options:
  -f, --file <FILE>        Path to a JSON export of journal entries
  -u, --user <USER>        User whose entries to browse
  -s, --search <TERM>      Search content and tags (case-insensitive)
      --mood <LABEL>       Exact mood label filter (e.g. "😊 Great")
  -t, --tag <TAG>          Tag filter, repeatable (any match qualifies)
      --range <RANGE>      all | today | week | month | three-months
      --sort <SORT>        newest | oldest | longest | shortest
      --source <SOURCE>    all | auto | manual
  -c, --calendar <MONTH>   Show the calendar for a month (YYYY-MM)
  -d, --day <DATE>         Show one day's entries (YYYY-MM-DD or YYYYMMDD)
  -v, --verbose            Print verbose output
```
*/

use chrono::{Datelike, Local};
use clap::Parser;
use solace::cli::CliArgs;
use solace::constants::DAYS_PER_WEEK;
use solace::entry::JournalEntry;
use solace::errors::{AppError, AppResult};
use solace::query::calendar::{month_view, MonthView};
use solace::query::day::{day_label, entries_on};
use solace::query::{filter_entries, FilterState};
use solace::store::{EntryStore, MemoryStore};
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("Starting solace");
    debug!("CLI arguments: {:?}", args);

    let now = Local::now();

    let raw = fs::read_to_string(&args.file)?;
    let all_entries: Vec<JournalEntry> = serde_json::from_str(&raw)?;
    debug!(count = all_entries.len(), "Loaded entries export");

    let user_id = args
        .user
        .clone()
        .or_else(|| all_entries.first().map(|entry| entry.user_id.clone()));
    let Some(user_id) = user_id else {
        println!("No journal entries in {}.", args.file.display());
        return Ok(());
    };

    let store = MemoryStore::with_entries(all_entries);
    let entries = store.list_entries(&user_id)?;

    if let Some(month) = args.parse_month() {
        let month = month.map_err(AppError::DateParse)?;
        let view = month_view(&entries, month, now.date_naive());
        render_calendar(&view);
    } else if let Some(day) = args.parse_day() {
        let day = day.map_err(|e| AppError::DateParse(e.to_string()))?;
        let selected = entries_on(&entries, day);
        println!(
            "{} ({} {})",
            day_label(day, now.date_naive()),
            selected.len(),
            if selected.len() == 1 { "entry" } else { "entries" }
        );
        println!();
        render_entries(&selected);
    } else {
        let filter = args.filter_state();
        let shown = filter_entries(&entries, &filter, now);
        render_list(&shown, &filter, entries.len());
    }

    Ok(())
}

/// Prints the filtered list view.
fn render_list(shown: &[JournalEntry], filter: &FilterState, total: usize) {
    if filter.is_active() {
        println!("Showing {} of {} entries (filters active)", shown.len(), total);
    } else {
        println!("Showing {} entries", shown.len());
    }
    println!();
    render_entries(shown);
}

/// Prints entry cards, one per entry.
fn render_entries(entries: &[JournalEntry]) {
    for entry in entries {
        let created = entry.created_at.with_timezone(&Local);
        let mut header = created.format("%Y-%m-%d %H:%M").to_string();
        if let Some(mood) = &entry.mood {
            header.push_str(&format!("  {}", mood));
        }
        if entry.is_auto_generated() {
            header.push_str("  [auto-generated]");
        }
        println!("{}", header);
        println!("{}", entry.content);
        if !entry.tags.is_empty() {
            let tags: Vec<String> = entry.tags.iter().map(|t| format!("#{}", t)).collect();
            println!("{}", tags.join(" "));
        }
        println!();
    }
}

/// Prints the month calendar grid with per-day entry counts.
fn render_calendar(view: &MonthView) {
    println!("{:^56}", view.month.label());
    for name in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        print!("{:>8}", name);
    }
    println!();

    for week in view.grid.chunks(DAYS_PER_WEEK) {
        for cell in week {
            let day = if cell.in_month {
                format!("{}", cell.date.day())
            } else {
                format!("({})", cell.date.day())
            };
            let day = if cell.is_today {
                format!("*{}", day)
            } else {
                day
            };
            let day = if cell.entry_count > 0 {
                format!("{}+{}", day, cell.entry_count)
            } else {
                day
            };
            print!("{:>8}", day);
        }
        println!();
    }

    println!();
    println!("(n) adjacent month   *n today   +n entries that day");
}
