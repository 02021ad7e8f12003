//! Availability computation — turns a time window, busy intervals, and tenant
//! settings into concrete bookable slots.
//!
//! Slots are bucketed by local calendar date in the tenant's timezone so an
//! agent can read a day's options aloud without re-deriving them. This module
//! is the single source of truth for "what times can I offer this caller".

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::hours::DayHours;
use crate::interval::BusyPeriod;
use crate::matcher;
use crate::settings::BookingSettings;
use crate::timezone::{local_instant, resolve_timezone};

/// A single bookable slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot start, rendered with the tenant's local UTC offset
    /// (e.g., "2026-03-16T09:00:00-04:00").
    pub time: DateTime<FixedOffset>,
    /// Seats available at this time. Always 1 for single-practitioner tenants.
    pub attendees: u32,
}

/// Open slots bucketed by local calendar date, in chronological order.
pub type DaySlots = BTreeMap<NaiveDate, Vec<Slot>>;

/// The full availability answer for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    /// Open slots keyed by local date ("YYYY-MM-DD"). Days with no open
    /// slots are omitted.
    pub slots: DaySlots,
    /// Whether the caller's proposed time matched an open slot.
    pub match_found: bool,
    /// The matched slot, present only when `match_found` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching_slot: Option<Slot>,
    /// The timezone actually used, after any UTC fallback.
    pub timezone: String,
    /// Total open slots across all days.
    pub total_slots: usize,
}

/// Generate bookable slots for the window `[start, end)`.
///
/// Local calendar days are walked in the tenant's timezone. Each enabled
/// day contributes candidate slots starting at its opening hour and stepping
/// by `slot_length_minutes`; a candidate is dropped when it would spill past
/// closing, overlaps a busy interval, or falls outside the requested window.
/// Days left with no slots are omitted from the map.
///
/// An unrecognized `timezone` falls back to UTC (logged, not an error), and
/// a window with `start >= end` yields an empty map. The advance-notice lead
/// time is not applied here; see [`BookingSettings::meets_advance_notice`].
///
/// # Arguments
///
/// * `start` — Window start (inclusive).
/// * `end` — Window end (exclusive).
/// * `busy_periods` — Validated busy intervals from the calendar provider.
/// * `timezone` — IANA timezone of the tenant (e.g., "America/New_York").
/// * `settings` — Tenant booking settings.
///
/// # Errors
/// Returns [`SlotError::InvalidSettings`] when `slot_length_minutes` is zero.
pub fn generate_slots(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    busy_periods: &[BusyPeriod],
    timezone: &str,
    settings: &BookingSettings,
) -> Result<DaySlots> {
    if settings.slot_length_minutes == 0 {
        return Err(SlotError::InvalidSettings(
            "slotLengthMinutes must be positive".to_string(),
        ));
    }

    // Resolve first; the UTC-fallback warning applies even to windows that
    // cannot hold a slot.
    let tz = resolve_timezone(timezone);
    let slot_length = Duration::minutes(i64::from(settings.slot_length_minutes));

    let mut slots = DaySlots::new();
    if start >= end {
        return Ok(slots);
    }

    // Walk local calendar dates; the window edges land mid-day in local
    // time, so boundary days are generated in full and clipped per slot.
    let first_date = start.with_timezone(&tz).date_naive();
    let last_date = end.with_timezone(&tz).date_naive();

    let mut date = first_date;
    while date <= last_date {
        if let Some(day) = settings.business_hours.for_weekday(date.weekday()) {
            if day.enabled {
                let day_slots =
                    slots_for_day(tz, date, *day, slot_length, busy_periods, start, end);
                if !day_slots.is_empty() {
                    slots.insert(date, day_slots);
                }
            }
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    Ok(slots)
}

/// Candidate slots for one enabled local day, filtered against the busy
/// intervals and clipped to the request window.
fn slots_for_day(
    tz: Tz,
    date: NaiveDate,
    day: DayHours,
    slot_length: Duration,
    busy_periods: &[BusyPeriod],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<Slot> {
    // Hours outside 0-23 name no wall-clock time; treat the day as closed,
    // like an inverted start/end pair.
    if day.start_hour > 23 || day.end_hour > 23 {
        log::debug!("skipping {}: business hours out of the 0-23 range", date);
        return Vec::new();
    }

    // An opening or closing hour erased by a spring-forward gap leaves the
    // day without a well-defined schedule; skip the whole day.
    let (open, close) = match (
        local_instant(tz, date, day.start_hour),
        local_instant(tz, date, day.end_hour),
    ) {
        (Some(open), Some(close)) => (open, close),
        _ => {
            log::debug!("skipping {}: business hours fall in a DST gap", date);
            return Vec::new();
        }
    };

    let close_utc = close.with_timezone(&Utc);
    let mut slot_start = open.with_timezone(&Utc);
    let mut out = Vec::new();

    // Step in absolute time so every slot is exactly slot_length long, even
    // on a day containing a DST transition.
    while slot_start + slot_length <= close_utc {
        let slot_end = slot_start + slot_length;

        let in_window = slot_start >= window_start && slot_end <= window_end;
        let blocked = busy_periods.iter().any(|b| b.overlaps(slot_start, slot_end));

        if in_window && !blocked {
            out.push(Slot {
                time: slot_start.with_timezone(&tz).fixed_offset(),
                attendees: 1,
            });
        }
        slot_start = slot_end;
    }

    out
}

/// Answer a full availability request: generate slots, then check the
/// caller's proposed time (when given) for an exact match.
///
/// The returned [`Availability`] is the complete payload for the booking
/// tool surface: day-bucketed slots, match outcome, the effective timezone,
/// and the slot total. An unparsable `proposed_time` is treated as no match
/// (logged), never an error.
///
/// # Errors
/// Propagates [`generate_slots`] errors.
pub fn check_availability(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    busy_periods: &[BusyPeriod],
    timezone: &str,
    settings: &BookingSettings,
    proposed_time: Option<&str>,
) -> Result<Availability> {
    // Resolve once so the UTC fallback is logged a single time and the
    // envelope reports the timezone actually used.
    let tz = resolve_timezone(timezone);
    let slots = generate_slots(start, end, busy_periods, tz.name(), settings)?;

    let matching_slot = proposed_time
        .and_then(|proposed| matcher::find_match(proposed, &slots))
        .cloned();
    let total_slots = slots.values().map(Vec::len).sum();

    Ok(Availability {
        slots,
        match_found: matching_slot.is_some(),
        matching_slot,
        timezone: tz.name().to_string(),
        total_slots,
    })
}
