//! # Slot Lattice Generation
//!
//! Partitions a business-day window into the day's candidate slots.

use chrono::{DateTime, Duration, Utc};

use crate::models::slot::Slot;

/// Span of a single slot. Each slot covers `[start, start + 29:59]`, with
/// the next slot starting one second after the previous slot's end, so
/// adjacent slots tile the day in effective 30-minute steps.
pub const SLOT_SPAN_SECONDS: i64 = 29 * 60 + 59;

/// Generates the ordered slot lattice for `[day_start, day_end]`.
///
/// Starting at `day_start`, slots of span 29:59 are emitted and the cursor
/// advances to one second past each emitted end. Generation continues while
/// the cursor is `<= day_end`: the boundary is deliberately inclusive, so a
/// day end falling exactly on a slot boundary still yields a final slot
/// starting at `day_end`. Downstream consumers rely on this off-by-one
/// inclusive behavior; do not tighten it to `<`.
///
/// Pure function of its inputs; no side effects. Slots come back with
/// `available = true` and contiguous zero-based indices.
pub fn generate_slots(day_start: DateTime<Utc>, day_end: DateTime<Utc>) -> Vec<Slot> {
    let span = Duration::seconds(SLOT_SPAN_SECONDS);
    let mut slots = Vec::new();
    let mut cursor = day_start;

    while cursor <= day_end {
        let end_time = cursor + span;
        slots.push(Slot {
            index: slots.len(),
            start_time: cursor,
            end_time,
            available: true,
        });
        cursor = end_time + Duration::seconds(1);
    }

    slots
}
