//! Property-based tests for slot generation using proptest.
//!
//! These verify invariants that should hold for *any* window, schedule, and
//! busy list, not just the hand-picked examples in `availability_tests.rs`.

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use proptest::prelude::*;
use slot_engine::availability::{check_availability, generate_slots};
use slot_engine::hours::{BusinessHours, DayHours};
use slot_engine::interval::BusyPeriod;
use slot_engine::settings::BookingSettings;
use slot_engine::timezone::{local_instant, resolve_timezone};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_timezone() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("UTC".to_string()),
        Just("America/New_York".to_string()),
        Just("America/Los_Angeles".to_string()),
        Just("Europe/London".to_string()),
        Just("Asia/Tokyo".to_string()),
        Just("Australia/Sydney".to_string()),
    ]
}

/// Timezone strings as they actually arrive from tenant records, typos
/// included.
fn arb_timezone_string() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_timezone(),
        Just("Mars/Phobos".to_string()),
        Just("not a zone".to_string()),
        Just(String::new()),
    ]
}

fn arb_day_hours() -> impl Strategy<Value = DayHours> {
    (any::<bool>(), 0u32..=22).prop_flat_map(|(enabled, start_hour)| {
        ((start_hour + 1)..=23).prop_map(move |end_hour| DayHours {
            enabled,
            start_hour,
            end_hour,
        })
    })
}

fn arb_business_hours() -> impl Strategy<Value = BusinessHours> {
    (
        proptest::option::of(arb_day_hours()),
        proptest::option::of(arb_day_hours()),
        proptest::option::of(arb_day_hours()),
        proptest::option::of(arb_day_hours()),
        proptest::option::of(arb_day_hours()),
        proptest::option::of(arb_day_hours()),
        proptest::option::of(arb_day_hours()),
    )
        .prop_map(
            |(monday, tuesday, wednesday, thursday, friday, saturday, sunday)| BusinessHours {
                monday,
                tuesday,
                wednesday,
                thursday,
                friday,
                saturday,
                sunday,
            },
        )
}

fn arb_settings() -> impl Strategy<Value = BookingSettings> {
    (15u32..=120, arb_business_hours()).prop_map(|(slot_length_minutes, business_hours)| {
        BookingSettings {
            slot_length_minutes,
            business_hours,
            ..BookingSettings::default()
        }
    })
}

/// A window starting somewhere in 2026, up to a week long.
/// Day is capped at 28 to avoid invalid month/day combos.
fn arb_window() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
    (1u32..=12, 1u32..=28, 0u32..=23, 0i64..=7 * 24 * 60).prop_map(
        |(month, day, hour, extent_minutes)| {
            let start = Utc.with_ymd_and_hms(2026, month, day, hour, 0, 0).unwrap();
            (start, start + Duration::minutes(extent_minutes))
        },
    )
}

/// Busy periods as (minute offset from window start, duration) pairs.
fn arb_busy_offsets() -> impl Strategy<Value = Vec<(i64, i64)>> {
    proptest::collection::vec((-720i64..=10_800, 15i64..=480), 0..8)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn busy_from_offsets(start: DateTime<Utc>, offsets: &[(i64, i64)]) -> Vec<BusyPeriod> {
    offsets
        .iter()
        .map(|&(offset, duration)| {
            let busy_start = start + Duration::minutes(offset);
            BusyPeriod::new(busy_start, busy_start + Duration::minutes(duration)).unwrap()
        })
        .collect()
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: No slot ever overlaps a busy period
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_never_overlap_busy_periods(
        (start, end) in arb_window(),
        offsets in arb_busy_offsets(),
        tz in arb_timezone(),
        settings in arb_settings(),
    ) {
        let busy = busy_from_offsets(start, &offsets);
        let slots = generate_slots(start, end, &busy, &tz, &settings).unwrap();
        let length = Duration::minutes(i64::from(settings.slot_length_minutes));

        for slot in slots.values().flatten() {
            let slot_start = slot.time.with_timezone(&Utc);
            let slot_end = slot_start + length;
            for period in &busy {
                prop_assert!(
                    !period.overlaps(slot_start, slot_end),
                    "slot {:?} overlaps busy {:?}-{:?}",
                    slot_start,
                    period.start,
                    period.end
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Every slot lies inside the requested window
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_lie_within_the_window(
        (start, end) in arb_window(),
        tz in arb_timezone(),
        settings in arb_settings(),
    ) {
        let slots = generate_slots(start, end, &[], &tz, &settings).unwrap();
        let length = Duration::minutes(i64::from(settings.slot_length_minutes));

        for slot in slots.values().flatten() {
            let slot_start = slot.time.with_timezone(&Utc);
            prop_assert!(slot_start >= start, "slot {:?} starts before {:?}", slot_start, start);
            prop_assert!(
                slot_start + length <= end,
                "slot {:?} ends after {:?}",
                slot_start,
                end
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Buckets exist only for enabled weekdays, keyed by local date
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn buckets_are_enabled_weekdays_keyed_by_local_date(
        (start, end) in arb_window(),
        tz in arb_timezone(),
        settings in arb_settings(),
    ) {
        let slots = generate_slots(start, end, &[], &tz, &settings).unwrap();
        let zone = resolve_timezone(&tz);

        for (date, day_slots) in &slots {
            let day = settings.business_hours.for_weekday(date.weekday());
            prop_assert!(
                day.is_some_and(|d| d.enabled),
                "bucket on {:?} but that weekday is closed",
                date
            );
            for slot in day_slots {
                let local_date = slot.time.with_timezone(&zone).date_naive();
                prop_assert_eq!(local_date, *date, "slot {:?} bucketed under {:?}", slot.time, date);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Slots start on the schedule grid within business hours
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_start_on_the_schedule_grid(
        (start, end) in arb_window(),
        tz in arb_timezone(),
        settings in arb_settings(),
    ) {
        let slots = generate_slots(start, end, &[], &tz, &settings).unwrap();
        let zone = resolve_timezone(&tz);
        let length = i64::from(settings.slot_length_minutes);

        for (date, day_slots) in &slots {
            let day = settings.business_hours.for_weekday(date.weekday()).unwrap();
            let open = local_instant(zone, *date, day.start_hour);
            let close = local_instant(zone, *date, day.end_hour);
            prop_assert!(open.is_some() && close.is_some(), "bucket exists for a gapped day");
            let open = open.unwrap().with_timezone(&Utc);
            let close = close.unwrap().with_timezone(&Utc);

            for slot in day_slots {
                let slot_start = slot.time.with_timezone(&Utc);
                let from_open = (slot_start - open).num_minutes();
                prop_assert!(slot_start >= open, "slot {:?} before opening {:?}", slot_start, open);
                prop_assert!(
                    slot_start + Duration::minutes(length) <= close,
                    "slot {:?} runs past closing {:?}",
                    slot_start,
                    close
                );
                prop_assert_eq!(
                    from_open % length,
                    0,
                    "slot {:?} is {} minutes after opening, off the {}-minute grid",
                    slot_start,
                    from_open,
                    length
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Day buckets are never empty and stay chronologically sorted
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn buckets_are_nonempty_and_sorted(
        (start, end) in arb_window(),
        offsets in arb_busy_offsets(),
        tz in arb_timezone(),
        settings in arb_settings(),
    ) {
        let busy = busy_from_offsets(start, &offsets);
        let slots = generate_slots(start, end, &busy, &tz, &settings).unwrap();

        for (date, day_slots) in &slots {
            prop_assert!(!day_slots.is_empty(), "empty bucket for {:?}", date);
            for pair in day_slots.windows(2) {
                prop_assert!(
                    pair[0].time < pair[1].time,
                    "bucket {:?} not strictly ascending",
                    date
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Generation is deterministic
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn generation_is_deterministic(
        (start, end) in arb_window(),
        offsets in arb_busy_offsets(),
        tz in arb_timezone(),
        settings in arb_settings(),
    ) {
        let busy = busy_from_offsets(start, &offsets);
        let first = generate_slots(start, end, &busy, &tz, &settings).unwrap();
        let second = generate_slots(start, end, &busy, &tz, &settings).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 7: The envelope total always matches the bucket sum
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn envelope_total_matches_bucket_sum(
        (start, end) in arb_window(),
        offsets in arb_busy_offsets(),
        tz in arb_timezone(),
        settings in arb_settings(),
    ) {
        let busy = busy_from_offsets(start, &offsets);
        let result = check_availability(start, end, &busy, &tz, &settings, None).unwrap();

        let bucket_sum: usize = result.slots.values().map(Vec::len).sum();
        prop_assert_eq!(result.total_slots, bucket_sum);
        prop_assert!(!result.match_found);
        prop_assert!(result.matching_slot.is_none());
    }
}

// ---------------------------------------------------------------------------
// Property 8: Any timezone string is answered, never panicked on
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn any_timezone_string_is_answered(
        (start, end) in arb_window(),
        offsets in arb_busy_offsets(),
        tz in arb_timezone_string(),
        settings in arb_settings(),
    ) {
        let busy = busy_from_offsets(start, &offsets);
        let result = generate_slots(start, end, &busy, &tz, &settings);
        prop_assert!(result.is_ok());
    }
}
