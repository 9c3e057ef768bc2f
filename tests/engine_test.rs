//! Tests for the normalize / classify / diff engine

mod common;

use common::{date, schedule_for};
use vuoro::engine::{
    delta, merge_schedules, parse_snapshot, rare_slots, serialize_snapshot, FirstRunPolicy,
    RarityRules,
};
use vuoro::models::{DaySchedule, Slot, Venue};

#[test]
fn test_normalizer_union_keeps_both_venues() {
    let a = schedule_for(
        "2024-06-03",
        &[(Venue::Talihalli, "17:00"), (Venue::Talihalli, "09:00")],
    );
    let b = schedule_for("2024-06-03", &[(Venue::TaliTenniskeskus, "18:30")]);

    let merged = merge_schedules([a.clone(), b.clone()]);
    let day = date("2024-06-03");

    assert_eq!(merged[&day].len(), a[&day].len() + b[&day].len());
    // A's slots first, then B's, original order preserved
    assert_eq!(merged[&day][0], Slot::new(Venue::Talihalli, "17:00"));
    assert_eq!(merged[&day][2], Slot::new(Venue::TaliTenniskeskus, "18:30"));
}

#[test]
fn test_classifier_soundness_and_completeness() {
    // Mon 2024-06-03 through Sun 2024-06-09, one evening and one
    // morning slot each day
    let mut canonical = DaySchedule::new();
    for day in 3..=9 {
        canonical.insert(
            date(&format!("2024-06-{day:02}")),
            vec![
                Slot::new(Venue::Talihalli, "18:00"),
                Slot::new(Venue::Talihalli, "08:00"),
            ],
        );
    }

    let rules = RarityRules::default();
    let rare = rare_slots(&canonical, &rules);

    // Mon-Thu only, and only the evening slot of each
    assert_eq!(rare.len(), 4);
    for (day, slots) in &rare {
        assert!(canonical.contains_key(day));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].time, "18:00");
        assert!(canonical[day].contains(&slots[0]));
    }
    assert!(!rare.contains_key(&date("2024-06-07"))); // Friday
    assert!(!rare.contains_key(&date("2024-06-08"))); // Saturday
    assert!(!rare.contains_key(&date("2024-06-09"))); // Sunday
}

#[test]
fn test_delta_monotonicity() {
    let prev = schedule_for("2024-06-03", &[(Venue::Talihalli, "17:00")]);
    let mut curr = prev.clone();
    curr.get_mut(&date("2024-06-03"))
        .unwrap()
        .push(Slot::new(Venue::Talihalli, "18:00"));

    let d = delta(Some(&prev), &curr, FirstRunPolicy::NotifyAll);

    assert_eq!(d.len(), 1);
    assert_eq!(
        d[&date("2024-06-03")],
        vec![Slot::new(Venue::Talihalli, "18:00")]
    );
}

#[test]
fn test_delta_absence_is_first_run() {
    let curr = schedule_for(
        "2024-06-03",
        &[(Venue::Talihalli, "17:00"), (Venue::TaliTenniskeskus, "18:30")],
    );

    assert_eq!(delta(None, &curr, FirstRunPolicy::NotifyAll), curr);
}

#[test]
fn test_delta_never_reports_disappearance() {
    let prev = schedule_for("2024-06-03", &[(Venue::Talihalli, "17:00")]);
    let curr = DaySchedule::new();

    assert!(delta(Some(&prev), &curr, FirstRunPolicy::NotifyAll).is_empty());
}

#[test]
fn test_snapshot_roundtrip_through_engine() {
    let rare = schedule_for(
        "2024-06-03",
        &[(Venue::Talihalli, "17:00"), (Venue::TaliTenniskeskus, "18:30")],
    );

    let payload = serialize_snapshot(&rare).unwrap();
    assert_eq!(parse_snapshot(&payload), Some(rare));

    let empty = serialize_snapshot(&DaySchedule::new()).unwrap();
    assert_eq!(empty, "{}");
    assert_eq!(parse_snapshot(&empty), Some(DaySchedule::new()));
}

/// The full scenario: Monday 2024-06-03, venue A has 17:00 and 09:00
/// open, venue B has 18:30. Two rare slots survive classification and,
/// with no baseline, both show up in the delta.
#[test]
fn test_end_to_end_scenario() {
    let venue_a = schedule_for(
        "2024-06-03",
        &[(Venue::Talihalli, "17:00"), (Venue::Talihalli, "09:00")],
    );
    let venue_b = schedule_for("2024-06-03", &[(Venue::TaliTenniskeskus, "18:30")]);

    let canonical = merge_schedules([venue_a, venue_b]);
    let day = date("2024-06-03");
    assert_eq!(
        canonical[&day],
        vec![
            Slot::new(Venue::Talihalli, "17:00"),
            Slot::new(Venue::Talihalli, "09:00"),
            Slot::new(Venue::TaliTenniskeskus, "18:30"),
        ]
    );

    let rare = rare_slots(&canonical, &RarityRules::default());
    assert_eq!(
        rare[&day],
        vec![
            Slot::new(Venue::Talihalli, "17:00"),
            Slot::new(Venue::TaliTenniskeskus, "18:30"),
        ]
    );

    let d = delta(None, &rare, FirstRunPolicy::NotifyAll);
    assert_eq!(d, rare);

    let lines = vuoro::discord::notify::notification_lines(&d);
    assert_eq!(
        lines,
        vec![
            "Talihalli Mon 2024-06-03 at 17:00",
            "Talin tenniskeskus Mon 2024-06-03 at 18:30",
        ]
    );
}
