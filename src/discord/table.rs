//! Availability-table rendering
//!
//! The full canonical schedule is rendered as a monospace grid: one row
//! per distinct time, one column per date headed by its weekday, venue
//! initials in the cells. Wrapped in a code block so Discord keeps the
//! alignment.

use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt::Write;

use crate::models::{weekday_of, DaySchedule, Venue};

const CELL_WIDTH: usize = 7;
const TIME_WIDTH: usize = 6;

/// Render the table message content for a canonical schedule
pub fn render_table(canonical: &DaySchedule, rendered_at: DateTime<Utc>) -> String {
    let times: BTreeSet<&str> = canonical
        .values()
        .flatten()
        .map(|slot| slot.time.as_str())
        .collect();
    let dates: Vec<_> = canonical.keys().copied().collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "**Available badminton slots ({})**",
        rendered_at.format("%Y-%m-%d %H:%M UTC")
    );
    for venue in Venue::ALL {
        let _ = writeln!(out, "<{}> {}", venue.booking_url(), venue.display_name());
    }

    out.push_str("```\n");
    let _ = write!(out, "{:>width$} ", "", width = TIME_WIDTH);
    for date in &dates {
        let _ = write!(out, "{:<width$}", weekday_of(*date).abbrev(), width = CELL_WIDTH);
    }
    out.push('\n');
    let _ = write!(out, "{:>width$} ", "", width = TIME_WIDTH);
    for date in &dates {
        let _ = write!(out, "{:<width$}", date.format("%d.%m.").to_string(), width = CELL_WIDTH);
    }
    out.push('\n');

    for time in times {
        let _ = write!(out, "{time:>width$} ", width = TIME_WIDTH);
        for date in &dates {
            let cell = cell_for(canonical, *date, time);
            let _ = write!(out, "{cell:<width$}", width = CELL_WIDTH);
        }
        out.push('\n');
    }
    out.push_str("```");
    out
}

fn cell_for(canonical: &DaySchedule, date: chrono::NaiveDate, time: &str) -> String {
    let initials: Vec<&str> = canonical
        .get(&date)
        .into_iter()
        .flatten()
        .filter(|slot| slot.time == time)
        .map(|slot| slot.venue.initials())
        .collect();
    if initials.is_empty() {
        "-".to_string()
    } else {
        initials.join(",")
    }
}
