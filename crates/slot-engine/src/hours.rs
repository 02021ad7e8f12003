//! Per-weekday business hours.
//!
//! Tenant settings carry a JSON object keyed by lowercase weekday name. A
//! missing key means the practice is closed that day; when the object is
//! absent entirely, the stock Monday-Friday 09:00-17:00 week applies.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Open hours for a single weekday.
///
/// `start_hour` and `end_hour` are local wall-clock hours (0-23). A day
/// with `start_hour >= end_hour`, or with an hour outside 0-23, yields no
/// slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    #[serde(default)]
    pub enabled: bool,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl DayHours {
    /// An enabled day open from `start_hour` to `end_hour`.
    pub fn open(start_hour: u32, end_hour: u32) -> Self {
        Self {
            enabled: true,
            start_hour,
            end_hour,
        }
    }
}

/// The seven-day business-hours table from a tenant settings record.
///
/// Weekday keys absent from the JSON deserialize to `None` and are treated
/// as closed days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(default)]
    pub monday: Option<DayHours>,
    #[serde(default)]
    pub tuesday: Option<DayHours>,
    #[serde(default)]
    pub wednesday: Option<DayHours>,
    #[serde(default)]
    pub thursday: Option<DayHours>,
    #[serde(default)]
    pub friday: Option<DayHours>,
    #[serde(default)]
    pub saturday: Option<DayHours>,
    #[serde(default)]
    pub sunday: Option<DayHours>,
}

impl BusinessHours {
    /// A week with every day closed. Useful as a base for building schedules
    /// that open only specific days.
    pub fn closed() -> Self {
        Self {
            monday: None,
            tuesday: None,
            wednesday: None,
            thursday: None,
            friday: None,
            saturday: None,
            sunday: None,
        }
    }

    /// The configured hours for `weekday`, or `None` when that day is closed.
    pub fn for_weekday(&self, weekday: Weekday) -> Option<&DayHours> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }

    /// Weekday-ordered view of the table, Monday first, with the lowercase
    /// names used on the wire.
    pub fn days(&self) -> [(&'static str, Option<&DayHours>); 7] {
        [
            ("monday", self.monday.as_ref()),
            ("tuesday", self.tuesday.as_ref()),
            ("wednesday", self.wednesday.as_ref()),
            ("thursday", self.thursday.as_ref()),
            ("friday", self.friday.as_ref()),
            ("saturday", self.saturday.as_ref()),
            ("sunday", self.sunday.as_ref()),
        ]
    }
}

impl Default for BusinessHours {
    /// Stock schedule: Monday-Friday 09:00-17:00, weekends closed.
    fn default() -> Self {
        let weekday = Some(DayHours::open(9, 17));
        Self {
            monday: weekday,
            tuesday: weekday,
            wednesday: weekday,
            thursday: weekday,
            friday: weekday,
            saturday: None,
            sunday: None,
        }
    }
}
