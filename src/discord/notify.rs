//! Rare-slot notification formatting
//!
//! One line per newly appeared slot, dates ascending. An empty delta
//! produces no message at all.

use crate::models::{weekday_of, DaySchedule};

/// Format one notification line per slot
pub fn notification_lines(delta: &DaySchedule) -> Vec<String> {
    delta
        .iter()
        .flat_map(|(date, slots)| {
            let weekday = weekday_of(*date);
            slots
                .iter()
                .map(move |slot| format!("{} {} {} at {}", slot.venue, weekday, date, slot.time))
        })
        .collect()
}

/// Build the notification message, or `None` when there is nothing new
pub fn format_notification(delta: &DaySchedule) -> Option<String> {
    let lines = notification_lines(delta);
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Slot, Venue};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_line_format() {
        let delta = DaySchedule::from([(
            date("2024-06-03"),
            vec![Slot::new(Venue::Talihalli, "17:00")],
        )]);

        let lines = notification_lines(&delta);
        assert_eq!(lines, vec!["Talihalli Mon 2024-06-03 at 17:00"]);
    }

    #[test]
    fn test_dates_ascending_one_line_per_slot() {
        let delta = DaySchedule::from([
            (
                date("2024-06-04"),
                vec![Slot::new(Venue::TaliTenniskeskus, "18:30")],
            ),
            (
                date("2024-06-03"),
                vec![
                    Slot::new(Venue::Talihalli, "17:00"),
                    Slot::new(Venue::Talihalli, "19:00"),
                ],
            ),
        ]);

        let message = format_notification(&delta).unwrap();
        let lines: Vec<_> = message.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("2024-06-03 at 17:00"));
        assert!(lines[1].contains("2024-06-03 at 19:00"));
        assert!(lines[2].contains("Talin tenniskeskus Tue 2024-06-04 at 18:30"));
    }

    #[test]
    fn test_empty_delta_is_no_message() {
        assert_eq!(format_notification(&DaySchedule::new()), None);
    }
}
