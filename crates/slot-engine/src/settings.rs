//! Tenant booking settings.
//!
//! Settings come out of a tenant record as a JSON object with camelCase
//! keys. Every field is optional on the wire; defaults are applied field by
//! field during deserialization so the rest of the crate always works with
//! a fully populated value.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::hours::BusinessHours;

fn default_slot_length() -> u32 {
    60
}

fn default_minimum_advance() -> u32 {
    120
}

/// Booking settings from a tenant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSettings {
    /// Length of each bookable slot in minutes.
    #[serde(default = "default_slot_length")]
    pub slot_length_minutes: u32,
    /// Padding between consecutive appointments. Carried through from the
    /// tenant record but not applied to slot placement.
    #[serde(default)]
    pub buffer_minutes: u32,
    /// Minimum lead time before a slot may be booked. Not applied while
    /// listing availability; see [`Self::meets_advance_notice`].
    #[serde(default = "default_minimum_advance")]
    pub minimum_advance_minutes: u32,
    /// Per-weekday open hours.
    #[serde(default)]
    pub business_hours: BusinessHours,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            slot_length_minutes: default_slot_length(),
            buffer_minutes: 0,
            minimum_advance_minutes: default_minimum_advance(),
            business_hours: BusinessHours::default(),
        }
    }
}

impl BookingSettings {
    /// Deserialize settings from a tenant record's JSON, applying the
    /// field-level defaults for anything missing.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidSettings`] when the JSON is malformed or
    /// a present field has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SlotError::InvalidSettings(format!("malformed settings JSON: {}", e)))
    }

    /// The earliest instant bookable at `now`, honoring the advance-notice
    /// lead time.
    pub fn earliest_bookable(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::minutes(i64::from(self.minimum_advance_minutes))
    }

    /// Advance-notice guard for the moment a booking is actually placed.
    ///
    /// Listing availability deliberately skips this check so an agent can
    /// read out the full schedule; callers apply it to the one slot being
    /// booked.
    pub fn meets_advance_notice(&self, proposed: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        proposed >= self.earliest_bookable(now)
    }
}
