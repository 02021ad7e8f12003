//! # slot-engine
//!
//! Deterministic booking-slot generation for AI voice agents.
//!
//! Given a tenant's busy intervals, per-weekday business hours, and an IANA
//! timezone, the engine computes the concrete bookable slots in a requested
//! window and checks a caller-proposed instant against them. Date arithmetic
//! of this kind is exactly what an LLM cannot be trusted to improvise, so it
//! lives here as a pure, synchronous core; calendar-provider HTTP, tenant
//! storage, and transport all stay outside and hand this crate plain data.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use slot_engine::{check_availability, BookingSettings};
//!
//! // Tenant record: hour-long slots, stock Monday-Friday 09:00-17:00 week.
//! let settings = BookingSettings::from_json(r#"{"slotLengthMinutes": 60}"#).unwrap();
//!
//! // One Monday, an empty calendar, no proposed time.
//! let start = Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap();
//! let end = Utc.with_ymd_and_hms(2026, 3, 17, 0, 0, 0).unwrap();
//! let result = check_availability(start, end, &[], "UTC", &settings, None).unwrap();
//!
//! // 09:00 through 16:00 — eight one-hour slots.
//! assert_eq!(result.total_slots, 8);
//! ```
//!
//! ## Modules
//!
//! - [`availability`] — time window → day-bucketed bookable slots
//! - [`matcher`] — millisecond-exact proposed-time matching
//! - [`hours`] — per-weekday business-hours table
//! - [`settings`] — tenant booking settings with field-level defaults
//! - [`interval`] — busy-period parsing and overlap tests
//! - [`timezone`] — IANA resolution with UTC fallback
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod hours;
pub mod interval;
pub mod matcher;
pub mod settings;
pub mod timezone;

pub use availability::{check_availability, generate_slots, Availability, DaySlots, Slot};
pub use error::SlotError;
pub use hours::{BusinessHours, DayHours};
pub use interval::{parse_busy_periods, parse_timestamp, BusyPeriod, RawBusyPeriod};
pub use matcher::find_match;
pub use settings::BookingSettings;
pub use timezone::resolve_timezone;
