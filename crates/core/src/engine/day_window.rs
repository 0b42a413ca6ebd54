//! # Business-Day Window Resolution
//!
//! Turns a caller-facing target date plus UTC offset into the UTC instants
//! bounding that day's bookable window. Day boundaries are the only place
//! the caller's offset matters; everything downstream works in UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use crate::config::ScheduleConfig;
use crate::errors::{BookingError, BookingResult};

/// Offsets beyond ±14 hours do not exist on any real timezone.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Resolves the bookable window for `target_date` as seen from a caller at
/// `utc_offset_minutes`, returning `(day_start, day_end)` as UTC instants.
///
/// The business hours in `config` are interpreted as local wall-clock times
/// on `target_date` at the caller's offset, then normalized to UTC. For
/// offsets far from UTC the resulting window legitimately crosses a UTC
/// midnight (e.g. at UTC+10 the 05:00 local open lands at 19:00 UTC on the
/// previous calendar day); callers must not assume both instants share the
/// target date.
pub fn resolve_day_window(
    target_date: NaiveDate,
    utc_offset_minutes: i32,
    config: &ScheduleConfig,
) -> BookingResult<(DateTime<Utc>, DateTime<Utc>)> {
    let offset = parse_offset(utc_offset_minutes)?;

    let day_start = offset
        .from_local_datetime(&target_date.and_time(config.day_start))
        .single()
        .ok_or_else(|| {
            BookingError::Validation(format!(
                "Cannot resolve day start for {} at offset {}",
                target_date, utc_offset_minutes
            ))
        })?
        .with_timezone(&Utc);

    let day_end = offset
        .from_local_datetime(&target_date.and_time(config.day_end))
        .single()
        .ok_or_else(|| {
            BookingError::Validation(format!(
                "Cannot resolve day end for {} at offset {}",
                target_date, utc_offset_minutes
            ))
        })?
        .with_timezone(&Utc);

    Ok((day_start, day_end))
}

/// Validates a caller-supplied UTC offset and turns it into a `FixedOffset`.
///
/// The range check runs before any arithmetic on the raw value, so arbitrary
/// caller input (including extremes like `i32::MIN`) yields a validation
/// error rather than overflowing.
pub fn parse_offset(utc_offset_minutes: i32) -> BookingResult<FixedOffset> {
    if utc_offset_minutes > MAX_OFFSET_MINUTES || utc_offset_minutes < -MAX_OFFSET_MINUTES {
        return Err(BookingError::Validation(format!(
            "UTC offset {} minutes is out of range (±{} minutes)",
            utc_offset_minutes, MAX_OFFSET_MINUTES
        )));
    }

    FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
        BookingError::Validation(format!("Invalid UTC offset: {} minutes", utc_offset_minutes))
    })
}
