//! Rare-slot classification
//!
//! A slot is "rare" when its time falls in a high-demand band and its
//! date lands on a high-demand weekday. Both rule sets are explicit
//! parameters so the predicate stays pure and testable; the defaults
//! mirror the Tali evening rush (17:00-20:00, Monday through Thursday).

use serde::{Deserialize, Serialize};

use crate::models::{weekday_of, DaySchedule, Weekday};

/// Rules deciding which slots count as rare
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RarityRules {
    /// Times of day (`HH:MM`) considered high-demand
    pub times: Vec<String>,

    /// Weekdays considered high-demand
    pub weekdays: Vec<Weekday>,
}

impl Default for RarityRules {
    fn default() -> Self {
        Self {
            times: ["17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00"]
                .into_iter()
                .map(String::from)
                .collect(),
            weekdays: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu],
        }
    }
}

impl RarityRules {
    /// Whether a (time, weekday) pair qualifies as rare
    pub fn matches(&self, time: &str, weekday: Weekday) -> bool {
        self.weekdays.contains(&weekday) && self.times.iter().any(|t| t == time)
    }
}

/// Filter a canonical schedule down to its rare slots.
///
/// Dates with no qualifying slots are omitted entirely; the delta
/// engine relies on absent keys, not empty lists, for its absence
/// checks.
pub fn rare_slots(canonical: &DaySchedule, rules: &RarityRules) -> DaySchedule {
    let mut rare = DaySchedule::new();
    for (date, slots) in canonical {
        let weekday = weekday_of(*date);
        if !rules.weekdays.contains(&weekday) {
            continue;
        }
        let qualifying: Vec<_> = slots
            .iter()
            .filter(|slot| rules.times.iter().any(|t| *t == slot.time))
            .cloned()
            .collect();
        if !qualifying.is_empty() {
            rare.insert(*date, qualifying);
        }
    }
    rare
}
