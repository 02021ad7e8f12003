//! IANA timezone resolution and local wall-clock mapping.

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

/// Resolve an IANA timezone identifier.
///
/// Unrecognized identifiers fall back to UTC with a warning instead of an
/// error: the tenant's timezone field is free text, and an availability
/// call with a misspelled zone still has to answer.
pub fn resolve_timezone(timezone: &str) -> Tz {
    match timezone.parse::<Tz>() {
        Ok(tz) => tz,
        Err(_) => {
            log::warn!("unrecognized timezone '{}', falling back to UTC", timezone);
            Tz::UTC
        }
    }
}

/// Map a local wall-clock hour on `date` to a zoned instant.
///
/// Ambiguous local times (the repeated hour at a DST fall-back) resolve to
/// the earliest instant. Local times erased by a spring-forward gap have no
/// instant and return `None`.
pub fn local_instant(tz: Tz, date: NaiveDate, hour: u32) -> Option<DateTime<Tz>> {
    let naive = date.and_hms_opt(hour, 0, 0)?;
    tz.from_local_datetime(&naive).earliest()
}
