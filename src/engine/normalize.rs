//! Schedule normalization
//!
//! Merges per-venue scrape results into one canonical schedule: a
//! per-date union over whatever dates each venue reported. Venues are
//! assumed to cover the same rolling window but this is not validated;
//! a venue reporting extra or missing dates simply contributes what it
//! has.

use crate::models::DaySchedule;

/// Merge venue schedules into one canonical schedule.
///
/// For a date present in several schedules the slot lists are
/// concatenated in venue order, duplicates and all. An empty venue
/// result contributes nothing.
pub fn merge_schedules<I>(venues: I) -> DaySchedule
where
    I: IntoIterator<Item = DaySchedule>,
{
    let mut canonical = DaySchedule::new();
    for schedule in venues {
        for (date, slots) in schedule {
            canonical.entry(date).or_default().extend(slots);
        }
    }
    canonical
}
