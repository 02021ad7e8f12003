//! Busy-interval parsing and overlap tests.
//!
//! Busy periods arrive from calendar free/busy queries as ISO 8601 string
//! pairs. They are validated at this boundary into half-open `[start, end)`
//! intervals so the availability code only ever sees well-formed data.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::{Result, SlotError};

/// Wire shape of a busy period as returned by a calendar free/busy query.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBusyPeriod {
    pub start: String,
    pub end: String,
}

/// A validated busy interval.
///
/// Half-open: the calendar is occupied for `[start, end)`, so a slot may
/// begin exactly at `end` or finish exactly at `start` without conflict.
#[derive(Debug, Clone, PartialEq)]
pub struct BusyPeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyPeriod {
    /// Build a busy period from two instants, enforcing `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(SlotError::InvalidInterval(format!(
                "busy period must end after it starts ({} >= {})",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a busy period from ISO 8601 strings; offsets are normalized to UTC.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_timestamp(start)?, parse_timestamp(end)?)
    }

    /// Half-open overlap test against a candidate slot interval.
    ///
    /// A slot ending exactly at `self.start` or beginning exactly at
    /// `self.end` does not overlap.
    pub fn overlaps(&self, slot_start: DateTime<Utc>, slot_end: DateTime<Utc>) -> bool {
        slot_start < self.end && slot_end > self.start
    }
}

impl TryFrom<&RawBusyPeriod> for BusyPeriod {
    type Error = SlotError;

    fn try_from(raw: &RawBusyPeriod) -> Result<Self> {
        Self::parse(&raw.start, &raw.end)
    }
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-16T14:00:00+00:00")
/// and naive local time (e.g., "2026-03-16T14:00:00"), which is interpreted as UTC.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    // Try RFC 3339 first (has timezone info).
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Fall back to naive datetime interpreted as UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| SlotError::InvalidInterval(format!("unparsable timestamp '{}': {}", s, e)))
}

/// Validate a batch of raw busy periods.
///
/// The first malformed entry aborts the whole call; a corrupt free/busy
/// payload is reported as a single error rather than applied partially.
pub fn parse_busy_periods(raw: &[RawBusyPeriod]) -> Result<Vec<BusyPeriod>> {
    raw.iter().map(BusyPeriod::try_from).collect()
}
