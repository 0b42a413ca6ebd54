//! # Schedule Configuration
//!
//! Fixed business-day parameters for slot generation. These used to be
//! scattered globals in earlier iterations of the platform; they are now an
//! explicit struct handed to the engine so every caller states which window
//! it is slotting against.

use chrono::NaiveTime;

/// Business-day window within which slots are generated.
///
/// The defaults (05:00:00 to 19:59:59) are load-bearing for compatibility
/// with the rest of the booking platform and must not drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Local wall-clock time at which the bookable day opens
    pub day_start: NaiveTime,

    /// Local wall-clock time of the last bookable instant of the day
    pub day_end: NaiveTime,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
            day_end: NaiveTime::from_hms_opt(19, 59, 59).unwrap(),
        }
    }
}
