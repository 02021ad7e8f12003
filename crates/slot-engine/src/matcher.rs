//! Proposed-time matching against generated slots.
//!
//! A caller often arrives with a specific time in mind ("can I come at two
//! tomorrow?"). Matching is exact to the millisecond: either that instant is
//! an open slot start or it is not, and near misses are the agent's problem
//! to negotiate, not this module's.

use crate::availability::{DaySlots, Slot};
use crate::interval::parse_timestamp;

/// Scan the day-bucketed slots for one starting exactly at `proposed_time`.
///
/// Buckets are walked in chronological order and the scan stops at the first
/// hit. Comparison is on epoch milliseconds, so the same instant written
/// with a different UTC offset still matches.
///
/// An unparsable `proposed_time` is logged and treated as no match rather
/// than an error.
pub fn find_match<'a>(proposed_time: &str, slots: &'a DaySlots) -> Option<&'a Slot> {
    let proposed = match parse_timestamp(proposed_time) {
        Ok(dt) => dt,
        Err(_) => {
            log::warn!(
                "unparsable proposed time '{}', treating as no match",
                proposed_time
            );
            return None;
        }
    };
    let proposed_millis = proposed.timestamp_millis();

    slots
        .values()
        .flatten()
        .find(|slot| slot.time.timestamp_millis() == proposed_millis)
}
