use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;
use slipway_core::config::ScheduleConfig;
use slipway_core::engine::availability::{annotate_availability, apply_minimum_duration};
use slipway_core::engine::day_window::resolve_day_window;
use slipway_core::engine::end_slots::{collect_end_slots, find_slot_containing};
use slipway_core::engine::lattice::{generate_slots, SLOT_SPAN_SECONDS};
use slipway_core::errors::BookingError;
use slipway_core::models::booking::BookingType;
use slipway_core::models::occupancy::OccupancyInterval;
use slipway_core::models::slot::Slot;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn occupancy(start: DateTime<Utc>, end: DateTime<Utc>) -> OccupancyInterval {
    OccupancyInterval {
        start_time: start,
        end_time: end,
    }
}

// A `now` long before any generated slot, so past-exclusion stays out of the
// way of tests that target the overlap rules.
fn distant_past() -> DateTime<Utc> {
    utc(2000, 1, 1, 0, 0, 0)
}

#[test]
fn test_lattice_completeness() {
    let day_start = utc(2020, 2, 2, 5, 0, 0);
    let day_end = utc(2020, 2, 2, 19, 59, 59);
    let slots = generate_slots(day_start, day_end);

    assert!(!slots.is_empty());
    assert_eq!(slots[0].start_time, day_start);

    for (i, slot) in slots.iter().enumerate() {
        assert_eq!(slot.index, i);
        assert_eq!(
            slot.end_time - slot.start_time,
            Duration::seconds(SLOT_SPAN_SECONDS)
        );
        assert!(slot.available);
    }

    // Strictly increasing, gap-free, non-overlapping
    for pair in slots.windows(2) {
        assert_eq!(pair[1].start_time, pair[0].end_time + Duration::seconds(1));
    }
}

#[test]
fn test_lattice_nineteen_slots_for_eight_to_seventeen() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 17, 0, 0));

    assert_eq!(slots.len(), 19);
    assert_eq!(slots[0].start_time, utc(2020, 2, 2, 8, 0, 0));
    assert_eq!(slots[18].start_time, utc(2020, 2, 2, 17, 0, 0));
    assert_eq!(slots[18].end_time, utc(2020, 2, 2, 17, 29, 59));
}

#[test]
fn test_lattice_inclusive_day_end_boundary() {
    // A day end falling exactly on a slot boundary still emits the final
    // slot starting at day end. This inclusive behavior is contract.
    let day_start = utc(2020, 2, 2, 8, 0, 0);
    let day_end = utc(2020, 2, 2, 9, 0, 0);
    let slots = generate_slots(day_start, day_end);

    assert_eq!(slots.len(), 3);
    assert_eq!(slots[2].start_time, day_end);
}

#[test]
fn test_lattice_single_slot_when_start_equals_end() {
    let at = utc(2020, 2, 2, 8, 0, 0);
    let slots = generate_slots(at, at);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].start_time, at);
}

#[test]
fn test_annotate_availability_concrete_scenario() {
    // Occupancy 10:00-11:29:59 over a 05:00-17:00 day: 25 slots, the three
    // slots covering 10:00-11:29:59 go unavailable, their neighbors do not.
    let slots = generate_slots(utc(2020, 2, 2, 5, 0, 0), utc(2020, 2, 2, 17, 0, 0));
    assert_eq!(slots.len(), 25);

    let occupancies = vec![occupancy(utc(2020, 2, 2, 10, 0, 0), utc(2020, 2, 2, 11, 29, 59))];
    let slots = annotate_availability(slots, &occupancies, distant_past());

    assert_eq!(slots[9].start_time, utc(2020, 2, 2, 9, 30, 0));
    assert!(slots[9].available);
    assert!(!slots[10].available);
    assert!(!slots[11].available);
    assert!(!slots[12].available);
    assert_eq!(slots[13].start_time, utc(2020, 2, 2, 11, 30, 0));
    assert!(slots[13].available);
}

#[test]
fn test_annotate_availability_empty_occupancies() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 17, 0, 0));
    let slots = annotate_availability(slots, &[], distant_past());

    assert!(slots.iter().all(|slot| slot.available));
}

#[test]
fn test_annotate_availability_occupancy_contained_in_slot() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 9, 0, 0));
    let occupancies = vec![occupancy(utc(2020, 2, 2, 8, 10, 0), utc(2020, 2, 2, 8, 20, 0))];
    let slots = annotate_availability(slots, &occupancies, distant_past());

    assert!(!slots[0].available);
    assert!(slots[1].available);
}

#[test]
fn test_annotate_availability_past_slots_excluded() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 17, 0, 0));
    let now = utc(2020, 2, 2, 10, 0, 0);
    let slots = annotate_availability(slots, &[], now);

    for slot in &slots {
        assert_eq!(slot.available, slot.start_time >= now);
    }
}

#[test]
fn test_annotate_availability_past_exclusion_beats_empty_occupancy() {
    // A slot already underway is never bookable, occupancy or not. A slot
    // starting exactly at `now` still is.
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 9, 0, 0));
    let slots = annotate_availability(slots, &[], utc(2020, 2, 2, 8, 30, 0));

    assert!(!slots[0].available);
    assert!(slots[1].available);
    assert!(slots[2].available);
}

#[test]
fn test_overlap_against_brute_force_oracle() {
    // Randomized slot/occupancy pairs checked against the plain inclusive
    // interval-intersection predicate.
    let mut rng = StdRng::seed_from_u64(42);
    let day = utc(2020, 2, 2, 0, 0, 0);

    for _ in 0..1000 {
        let slot_start = day + Duration::seconds(rng.gen_range(0..86_400));
        let slot = Slot {
            index: 0,
            start_time: slot_start,
            end_time: slot_start + Duration::seconds(SLOT_SPAN_SECONDS),
            available: true,
        };

        let occ_start = day + Duration::seconds(rng.gen_range(0..86_400));
        let occ = occupancy(occ_start, occ_start + Duration::seconds(rng.gen_range(0..14_400)));

        let annotated = annotate_availability(vec![slot.clone()], &[occ.clone()], distant_past());

        let intersects = slot.start_time <= occ.end_time && occ.start_time <= slot.end_time;
        assert_eq!(
            annotated[0].available, !intersects,
            "slot [{}, {}] vs occupancy [{}, {}]",
            slot.start_time, slot.end_time, occ.start_time, occ.end_time
        );
    }
}

#[test]
fn test_minimum_duration_propagates_backward() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 10, 30, 0));
    assert_eq!(slots.len(), 6);

    // Knock out index 3; for customer bookings the whole prefix collapses
    // because the reduction cascades backward through freshly-marked slots.
    let occupancies = vec![occupancy(utc(2020, 2, 2, 9, 30, 0), utc(2020, 2, 2, 9, 59, 59))];
    let slots = annotate_availability(slots, &occupancies, distant_past());
    let slots = apply_minimum_duration(slots, BookingType::CustomerBooking);

    assert_eq!(
        slots.iter().map(|s| s.available).collect::<Vec<_>>(),
        vec![false, false, false, false, true, true]
    );
}

#[test]
fn test_minimum_duration_rule_invariant() {
    // Whatever the raw availability, after reduction no available slot may
    // precede an unavailable one, and the last slot keeps its raw value.
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 12, 0, 0));
    let occupancies = vec![
        occupancy(utc(2020, 2, 2, 9, 0, 0), utc(2020, 2, 2, 9, 29, 59)),
        occupancy(utc(2020, 2, 2, 11, 0, 0), utc(2020, 2, 2, 11, 29, 59)),
    ];
    let raw = annotate_availability(slots, &occupancies, distant_past());
    let last_raw = raw.last().map(|s| s.available);
    let reduced = apply_minimum_duration(raw, BookingType::CustomerBooking);

    for pair in reduced.windows(2) {
        assert!(
            !(pair[0].available && !pair[1].available),
            "slot {} available but its successor is not",
            pair[0].index
        );
    }
    assert_eq!(reduced.last().map(|s| s.available), last_raw);
}

#[test]
fn test_minimum_duration_no_effect_for_owner_booking() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 10, 30, 0));
    let occupancies = vec![occupancy(utc(2020, 2, 2, 9, 30, 0), utc(2020, 2, 2, 9, 59, 59))];
    let before = annotate_availability(slots, &occupancies, distant_past());
    let after = apply_minimum_duration(before.clone(), BookingType::OwnerBooking);

    assert_eq!(before, after);
}

#[test]
fn test_minimum_duration_last_slot_untouched() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 9, 0, 0));
    let slots = apply_minimum_duration(slots, BookingType::CustomerBooking);

    assert!(slots.last().unwrap().available);
}

#[rstest]
#[case(utc(2020, 2, 2, 8, 0, 0), Some(0))]
#[case(utc(2020, 2, 2, 8, 29, 59), Some(0))]
#[case(utc(2020, 2, 2, 8, 30, 0), Some(1))]
#[case(utc(2020, 2, 2, 9, 29, 59), Some(2))]
#[case(utc(2020, 2, 2, 7, 59, 59), None)]
#[case(utc(2020, 2, 2, 9, 30, 0), None)]
fn test_find_slot_containing(#[case] at: DateTime<Utc>, #[case] expected: Option<usize>) {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 9, 0, 0));

    assert_eq!(find_slot_containing(&slots, at), expected);
}

#[test]
fn test_collect_end_slots_stops_at_first_unavailable() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 12, 0, 0));
    let occupancies = vec![occupancy(utc(2020, 2, 2, 10, 0, 0), utc(2020, 2, 2, 10, 29, 59))];
    let slots = annotate_availability(slots, &occupancies, distant_past());

    // Index 4 (10:00) is unavailable; a scan from index 1 collects 1..=3 and
    // never reaches anything at or past the blocker.
    let run = collect_end_slots(&slots, 1);
    assert_eq!(
        run.iter().map(|s| s.index).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn test_collect_end_slots_unavailable_start_yields_nothing() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 12, 0, 0));
    let occupancies = vec![occupancy(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 8, 29, 59))];
    let slots = annotate_availability(slots, &occupancies, distant_past());

    assert!(collect_end_slots(&slots, 0).is_empty());
}

#[test]
fn test_collect_end_slots_runs_to_lattice_end() {
    let slots = generate_slots(utc(2020, 2, 2, 8, 0, 0), utc(2020, 2, 2, 9, 0, 0));
    let run = collect_end_slots(&slots, 1);

    assert_eq!(run.iter().map(|s| s.index).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_resolve_day_window_utc() {
    let config = ScheduleConfig::default();
    let date = NaiveDate::from_ymd_opt(2020, 2, 2).unwrap();
    let (day_start, day_end) = resolve_day_window(date, 0, &config).unwrap();

    assert_eq!(day_start, utc(2020, 2, 2, 5, 0, 0));
    assert_eq!(day_end, utc(2020, 2, 2, 19, 59, 59));
}

#[rstest]
// UTC+10: the 05:00 local open lands on the previous UTC day at 19:00
#[case(600, utc(2020, 2, 1, 19, 0, 0), utc(2020, 2, 2, 9, 59, 59))]
// UTC-2: the window shifts later within the same UTC day
#[case(-120, utc(2020, 2, 2, 7, 0, 0), utc(2020, 2, 2, 21, 59, 59))]
// UTC+5:30 (half-hour offset)
#[case(330, utc(2020, 2, 1, 23, 30, 0), utc(2020, 2, 2, 14, 29, 59))]
fn test_resolve_day_window_offsets(
    #[case] offset_minutes: i32,
    #[case] expected_start: DateTime<Utc>,
    #[case] expected_end: DateTime<Utc>,
) {
    let config = ScheduleConfig::default();
    let date = NaiveDate::from_ymd_opt(2020, 2, 2).unwrap();
    let (day_start, day_end) = resolve_day_window(date, offset_minutes, &config).unwrap();

    assert_eq!(day_start, expected_start);
    assert_eq!(day_end, expected_end);
}

#[rstest]
#[case(841)]
#[case(-841)]
// Extremes straight from caller input must fail validation, not overflow
// inside the offset arithmetic
#[case(40_000_000)]
#[case(i32::MAX)]
#[case(i32::MIN)]
fn test_resolve_day_window_rejects_impossible_offsets(#[case] offset_minutes: i32) {
    let config = ScheduleConfig::default();
    let date = NaiveDate::from_ymd_opt(2020, 2, 2).unwrap();
    let result = resolve_day_window(date, offset_minutes, &config);

    match result {
        Err(BookingError::Validation(_)) => {}
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}
