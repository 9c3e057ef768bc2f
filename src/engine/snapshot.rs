//! Snapshot codec
//!
//! The rare schedule from the previous run travels between invocations
//! as a single JSON blob stored in the history channel. Serialization
//! must round-trip exactly; parsing must never fail the run, since the
//! stored message can be edited or garbled out-of-band. A payload that
//! does not parse is treated as "no snapshot", which hands the decision
//! to [`crate::engine::FirstRunPolicy`].

use crate::models::DaySchedule;

/// Serialize a rare schedule for storage.
///
/// The empty schedule serializes to `{}`, a valid payload distinct from
/// an empty string.
pub fn serialize_snapshot(schedule: &DaySchedule) -> serde_json::Result<String> {
    serde_json::to_string(schedule)
}

/// Parse a stored payload back into a schedule.
///
/// Returns `None` on any malformed input; the caller proceeds as if no
/// prior snapshot existed.
pub fn parse_snapshot(payload: &str) -> Option<DaySchedule> {
    match serde_json::from_str(payload) {
        Ok(schedule) => Some(schedule),
        Err(err) => {
            tracing::warn!(error = %err, "stored snapshot did not parse, treating as absent");
            None
        }
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
    fn test_roundtrip() {
        let schedule = DaySchedule::from([
            (
                date("2024-06-03"),
                vec![
                    Slot::new(Venue::Talihalli, "17:00"),
                    Slot::new(Venue::TaliTenniskeskus, "18:30"),
                ],
            ),
            (
                date("2024-06-05"),
                vec![Slot::new(Venue::Talihalli, "19:00")],
            ),
        ]);

        let payload = serialize_snapshot(&schedule).unwrap();
        assert_eq!(parse_snapshot(&payload), Some(schedule));
    }

    #[test]
    fn test_empty_schedule_serializes_to_empty_object() {
        let payload = serialize_snapshot(&DaySchedule::new()).unwrap();
        assert_eq!(payload, "{}");
        assert_eq!(parse_snapshot(&payload), Some(DaySchedule::new()));
    }

    #[test]
    fn test_malformed_payload_is_absent() {
        assert_eq!(parse_snapshot(""), None);
        assert_eq!(parse_snapshot("not json at all"), None);
        assert_eq!(parse_snapshot(r#"{"2024-06-03": "oops"}"#), None);
        assert_eq!(parse_snapshot(r#"{"not-a-date": []}"#), None);
    }
}
