//! # End-Slot Scan
//!
//! Given an annotated lattice and a chosen start time, bounds the valid
//! booking end times: locate the slot containing the start, then walk
//! forward collecting the maximal contiguous available run. Pricing of the
//! collected candidates is the HTTP layer's job, one quote per candidate.

use chrono::{DateTime, Utc};

use crate::models::slot::Slot;

/// Index of the first slot whose inclusive `[start, end]` contains `at`.
///
/// Slots never overlap, so the first match is the only match.
pub fn find_slot_containing(slots: &[Slot], at: DateTime<Utc>) -> Option<usize> {
    slots
        .iter()
        .position(|slot| at >= slot.start_time && at <= slot.end_time)
}

/// Collects the contiguous available run starting at `start_index`.
///
/// The scan stops at the first unavailable slot or the end of the lattice,
/// never wraps, and never includes the slot that stopped it. An unavailable
/// slot at `start_index` itself yields no candidates.
pub fn collect_end_slots(slots: &[Slot], start_index: usize) -> Vec<Slot> {
    slots
        .iter()
        .skip(start_index)
        .take_while(|slot| slot.available)
        .cloned()
        .collect()
}
