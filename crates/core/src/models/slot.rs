use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::pricing::PriceQuote;

/// One candidate bookable interval within a business day.
///
/// Slots are built fresh per request, annotated in place by the availability
/// passes, and discarded when the response is written. Nothing persists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Zero-based position within the day's lattice
    pub index: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Computed by the availability passes; `true` until proven otherwise
    pub available: bool,
}

/// Wire projection of a [`Slot`].
///
/// `available` is serialized only in contexts that asked for it (the
/// full-day listing does, end-slot candidates do not). Timestamps are always
/// RFC 3339 UTC; the caller's UTC offset is an input concern only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub index: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl SlotResponse {
    /// Projects a slot to its wire form.
    pub fn from_slot(slot: &Slot, include_availability: bool) -> Self {
        Self {
            index: slot.index,
            start_time: slot.start_time,
            end_time: slot.end_time,
            available: include_availability.then_some(slot.available),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetSlotsResponse {
    pub slots: Vec<SlotResponse>,
}

/// A priced end-time option reachable from a chosen start slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSlotResponse {
    pub index: usize,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_amount: f64,
    pub currency: String,
}

impl EndSlotResponse {
    pub fn from_slot(slot: &Slot, quote: PriceQuote) -> Self {
        Self {
            index: slot.index,
            start_time: slot.start_time,
            end_time: slot.end_time,
            total_amount: quote.total_amount,
            currency: quote.currency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEndSlotsResponse {
    pub end_slots: Vec<EndSlotResponse>,
}
