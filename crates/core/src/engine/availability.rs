//! # Availability Annotation
//!
//! Two sequential passes over a freshly generated lattice:
//!
//! 1. [`annotate_availability`] applies the occupancy overlap test and the
//!    past-slot cutoff.
//! 2. [`apply_minimum_duration`] enforces the customer-booking duration
//!    floor on top of the finalized raw availability.
//!
//! Pass order matters: the duration reduction reads its neighbor's final raw
//! availability, so it must run only after the overlap pass is complete.

use chrono::{DateTime, Utc};

use crate::models::{booking::BookingType, occupancy::OccupancyInterval, slot::Slot};

/// True when the slot and occupancy intervals intersect.
///
/// The three-way inclusive test catches partial overlap on either edge as
/// well as full containment in both directions:
/// - slot start inside `[occ.start, occ.end]`, or
/// - slot end inside `[occ.start, occ.end]`, or
/// - occupancy fully contained within the slot.
fn overlaps(slot: &Slot, occ: &OccupancyInterval) -> bool {
    (slot.start_time >= occ.start_time && slot.start_time <= occ.end_time)
        || (slot.end_time >= occ.start_time && slot.end_time <= occ.end_time)
        || (slot.start_time <= occ.start_time && slot.end_time >= occ.end_time)
}

/// Marks slots unavailable against existing occupancies and elapsed time.
///
/// A slot is unavailable if it overlaps any supplied occupancy, or if its
/// start time is strictly before `now` (a slot already underway cannot be
/// booked). An empty occupancy set leaves every future slot available.
///
/// O(slots × occupancies); both are small for a single business day, so no
/// interval index is warranted.
pub fn annotate_availability(
    mut slots: Vec<Slot>,
    occupancies: &[OccupancyInterval],
    now: DateTime<Utc>,
) -> Vec<Slot> {
    for slot in &mut slots {
        if slot.start_time < now {
            slot.available = false;
            continue;
        }

        if occupancies.iter().any(|occ| overlaps(slot, occ)) {
            slot.available = false;
        }
    }

    slots
}

/// Enforces the minimum two-slot (one hour) window for customer bookings.
///
/// A slot only qualifies as a start if at least one further slot remains
/// free immediately after it, so any slot whose successor is unavailable is
/// forced unavailable too. Iteration runs from the last slot backward: that
/// is what lets a single pass cascade across a run of trailing unavailable
/// slots (a forward pass would only propagate one step per run). The last
/// slot is never altered by this rule.
///
/// Owner bookings carry no duration floor and pass through untouched.
pub fn apply_minimum_duration(mut slots: Vec<Slot>, booking_type: BookingType) -> Vec<Slot> {
    if booking_type != BookingType::CustomerBooking {
        return slots;
    }

    for i in (0..slots.len().saturating_sub(1)).rev() {
        if !slots[i + 1].available {
            slots[i].available = false;
        }
    }

    slots
}
