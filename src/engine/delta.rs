//! Delta computation between runs
//!
//! Compares the current rare schedule against the snapshot persisted by
//! the previous run and keeps only slots that newly appeared. The engine
//! detects appearances only; a slot or date vanishing from the schedule
//! is never reported.

use std::collections::HashSet;

use crate::models::{DaySchedule, Slot};

/// What to do when no comparison baseline exists.
///
/// A baseline is missing on the very first run and whenever the
/// persisted snapshot fails to parse. Either way the current snapshot
/// is written afterwards, so the choice only affects whether that one
/// run notifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FirstRunPolicy {
    /// Treat every current rare slot as new: flood once, then settle
    #[default]
    NotifyAll,

    /// Stay silent until a baseline exists
    Suppress,
}

/// Compute the slots newly appeared since the previous snapshot.
///
/// With a baseline, a slot is new iff no slot with equal (venue, time)
/// exists under the same date in `previous`. The check is existence,
/// not multiset comparison: order and duplicate counts in the snapshot
/// are irrelevant. Dates present only in `previous` are ignored.
pub fn delta(
    previous: Option<&DaySchedule>,
    current: &DaySchedule,
    policy: FirstRunPolicy,
) -> DaySchedule {
    let Some(previous) = previous else {
        return match policy {
            FirstRunPolicy::NotifyAll => current.clone(),
            FirstRunPolicy::Suppress => DaySchedule::new(),
        };
    };

    let mut fresh = DaySchedule::new();
    for (date, slots) in current {
        let seen: HashSet<&Slot> = previous
            .get(date)
            .map(|prev| prev.iter().collect())
            .unwrap_or_default();
        let new_slots: Vec<_> = slots
            .iter()
            .filter(|slot| !seen.contains(*slot))
            .cloned()
            .collect();
        if !new_slots.is_empty() {
            fresh.insert(*date, new_slots);
        }
    }
    fresh
}
