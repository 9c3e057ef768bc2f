// Core data structures for the vuoro availability watcher

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A bookable venue on the Cintoia platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    Talihalli,
    TaliTenniskeskus,
}

impl Venue {
    /// All venues, in the order they are scraped and merged
    pub const ALL: [Venue; 2] = [Venue::Talihalli, Venue::TaliTenniskeskus];

    /// Human-readable venue name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Talihalli => "Talihalli",
            Self::TaliTenniskeskus => "Talin tenniskeskus",
        }
    }

    /// Booking-site base URL
    pub fn booking_url(&self) -> &'static str {
        match self {
            Self::Talihalli => "https://talihalli.cintoia.com",
            Self::TaliTenniskeskus => "https://talitaivallahti.feel.cintoia.com",
        }
    }

    /// Two-letter initials used in table cells
    pub fn initials(&self) -> &'static str {
        match self {
            Self::Talihalli => "Ha",
            Self::TaliTenniskeskus => "Te",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single reservable slot: a venue and a time of day in `HH:MM` 24h form.
///
/// Equality is structural over (venue, time); the date a slot belongs to
/// lives in the enclosing [`DaySchedule`] key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub venue: Venue,
    pub time: String,
}

impl Slot {
    pub fn new(venue: Venue, time: impl Into<String>) -> Self {
        Self {
            venue,
            time: time.into(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.venue, self.time)
    }
}

/// Open slots keyed by calendar date.
///
/// Slot lists preserve the order sources reported them in; duplicates are
/// kept as-is. Dates with no qualifying slots are absent rather than
/// present with an empty list.
pub type DaySchedule = BTreeMap<NaiveDate, Vec<Slot>>;

/// Day of week, locale-free.
///
/// Derived from the civil date with a fixed calendar algorithm so the
/// rarity rules never depend on runtime locale state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Three-letter English abbreviation
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }

    /// Parse a three-letter abbreviation, case-insensitive
    pub fn from_abbrev(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mon" => Some(Self::Mon),
            "tue" => Some(Self::Tue),
            "wed" => Some(Self::Wed),
            "thu" => Some(Self::Thu),
            "fri" => Some(Self::Fri),
            "sat" => Some(Self::Sat),
            "sun" => Some(Self::Sun),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Weekday of a civil date
pub fn weekday_of(date: NaiveDate) -> Weekday {
    match date.weekday() {
        chrono::Weekday::Mon => Weekday::Mon,
        chrono::Weekday::Tue => Weekday::Tue,
        chrono::Weekday::Wed => Weekday::Wed,
        chrono::Weekday::Thu => Weekday::Thu,
        chrono::Weekday::Fri => Weekday::Fri,
        chrono::Weekday::Sat => Weekday::Sat,
        chrono::Weekday::Sun => Weekday::Sun,
    }
}
