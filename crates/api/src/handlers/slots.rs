//! # Slot Handlers
//!
//! Handlers for the two availability flows:
//!
//! - `get_slots` returns the full annotated lattice for one business day.
//! - `get_end_slots` takes a chosen start time and returns the priced end
//!   time options reachable from it.
//!
//! Both flows share the same pipeline: resolve the business-day window from
//! the caller's date and UTC offset, fetch the day's occupancies from the
//! occupancy service, generate the slot lattice, annotate availability
//! (occupancy overlap plus past-slot exclusion), and apply the customer
//! minimum-duration rule. `get_end_slots` then locates the slot containing
//! the requested start, walks the contiguous available run, and quotes each
//! candidate against the pricing service.
//!
//! All validation happens before any collaborator call, and any collaborator
//! failure aborts the whole request: there are no partial-availability or
//! partially-priced responses.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use slipway_core::{
    engine::{
        availability::{annotate_availability, apply_minimum_duration},
        day_window::{parse_offset, resolve_day_window},
        end_slots::{collect_end_slots, find_slot_containing},
        lattice::generate_slots,
    },
    errors::BookingError,
    models::{
        booking::BookingType,
        pricing::PriceQuote,
        slot::{EndSlotResponse, GetEndSlotsResponse, GetSlotsResponse, Slot, SlotResponse},
    },
};

use crate::{
    middleware::{auth::Principal, error_handling::AppError},
    ApiState,
};

/// Query parameters for the full-day slot listing
///
/// # Fields
///
/// * `date` - Target business day, ISO format (YYYY-MM-DD)
/// * `booking_type` - `CUSTOMER_BOOKING` or `OWNER_BOOKING`
/// * `utc_offset` - Caller's UTC offset in minutes (default: 0); used only
///   to interpret the day boundaries, never echoed in output
/// * `asset_id` - Boat to check; falls back to the configured default
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSlotsQuery {
    pub date: String,
    pub booking_type: String,
    pub utc_offset: Option<i32>,
    pub asset_id: Option<String>,
}

/// Query parameters for the end-slot quoting flow
///
/// # Fields
///
/// * `start_time` - Chosen booking start, ISO datetime
/// * `booking_type` - `CUSTOMER_BOOKING` or `OWNER_BOOKING`
/// * `utc_offset` - Caller's UTC offset in minutes (default: 0)
/// * `asset_id` - Boat to check; falls back to the configured default
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetEndSlotsQuery {
    pub start_time: String,
    pub booking_type: String,
    pub utc_offset: Option<i32>,
    pub asset_id: Option<String>,
}

/// Returns the day's full slot lattice with availability annotations
///
/// # Endpoint
///
/// ```text
/// GET /api/slots?date=2020-02-02&bookingType=CUSTOMER_BOOKING&utcOffset=120
/// ```
///
/// # Errors
///
/// * `BookingError::Authorization` - Caller lacks a booking group
/// * `BookingError::Validation` - Malformed date, booking type, or offset
/// * `BookingError::Upstream` - Occupancy service failure
#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    principal: Principal,
    Query(query): Query<GetSlotsQuery>,
) -> Result<Json<GetSlotsResponse>, AppError> {
    principal.require_booking_access()?;

    // Validate everything before touching the occupancy service
    let booking_type: BookingType = query.booking_type.parse()?;
    let target_date = parse_iso_date(&query.date)?;
    let utc_offset = query.utc_offset.unwrap_or(0);
    let (day_start, day_end) = resolve_day_window(target_date, utc_offset, &state.schedule)?;

    let asset_id = query
        .asset_id
        .unwrap_or_else(|| state.default_asset_id.clone());
    let occupancies = state
        .occupancy
        .occupancies_for_window(&asset_id, day_start, day_end)
        .await?;

    // Pure pipeline over the fetched occupancies
    let slots = generate_slots(day_start, day_end);
    let slots = annotate_availability(slots, &occupancies, Utc::now());
    let slots = apply_minimum_duration(slots, booking_type);

    let slots = slots
        .iter()
        .map(|slot| SlotResponse::from_slot(slot, true))
        .collect();

    Ok(Json(GetSlotsResponse { slots }))
}

/// Returns priced end-slot options for a chosen start time
///
/// # Endpoint
///
/// ```text
/// GET /api/end-slots?startTime=2020-02-02T10:00:00Z&bookingType=CUSTOMER_BOOKING
/// ```
///
/// The business day is derived from `startTime` as seen at the caller's
/// offset; a start time outside that day's window is a validation error. The
/// slot containing the start is located (404 when none matches), the
/// contiguous available run is collected, and each candidate is quoted with
/// one pricing call covering `[start_time, candidate.end_time]`. Quotes run
/// concurrently but the response is always ordered by ascending slot index,
/// and a single failed quote fails the whole request.
///
/// # Errors
///
/// * `BookingError::Authorization` - Caller lacks a booking group
/// * `BookingError::Validation` - Malformed input or start outside the day
/// * `BookingError::NotFound` - Start time maps to no generated slot
/// * `BookingError::Upstream` - Occupancy or pricing service failure
#[axum::debug_handler]
pub async fn get_end_slots(
    State(state): State<Arc<ApiState>>,
    principal: Principal,
    Query(query): Query<GetEndSlotsQuery>,
) -> Result<Json<GetEndSlotsResponse>, AppError> {
    principal.require_booking_access()?;

    // Validate everything before touching any collaborator
    let booking_type: BookingType = query.booking_type.parse()?;
    let start_time = parse_iso_datetime(&query.start_time)?;
    let utc_offset = query.utc_offset.unwrap_or(0);

    // The business day is the start time's calendar day at the caller's offset
    let caller_offset = parse_offset(utc_offset)?;
    let target_date = start_time.with_timezone(&caller_offset).date_naive();
    let (day_start, day_end) = resolve_day_window(target_date, utc_offset, &state.schedule)?;

    if start_time < day_start || start_time > day_end {
        return Err(AppError(BookingError::Validation(format!(
            "Start time {} is outside the bookable day ({} to {})",
            start_time, day_start, day_end
        ))));
    }

    let asset_id = query
        .asset_id
        .unwrap_or_else(|| state.default_asset_id.clone());
    let occupancies = state
        .occupancy
        .occupancies_for_window(&asset_id, day_start, day_end)
        .await?;

    let slots = generate_slots(day_start, day_end);
    let slots = annotate_availability(slots, &occupancies, Utc::now());
    let slots = apply_minimum_duration(slots, booking_type);

    // Slots are non-overlapping, so the first containing slot is the only one.
    // Valid preconditions make a miss impossible, but treat it defensively as
    // not-found rather than returning an empty result.
    let start_index = find_slot_containing(&slots, start_time).ok_or_else(|| {
        BookingError::NotFound(format!("No bookable slot contains start time {}", start_time))
    })?;

    let candidates = collect_end_slots(&slots, start_index);
    let end_slots = price_candidates(&state, start_time, &candidates).await?;

    Ok(Json(GetEndSlotsResponse { end_slots }))
}

/// Quotes every candidate end slot and restores slot order.
///
/// One pricing call per candidate: each end slot is a distinct quotable
/// duration, so there is no aggregate call to make. Calls run concurrently;
/// results are keyed by slot index and reassembled in candidate order. The
/// first failed quote aborts the remaining in-flight calls and fails the
/// request, since a mix of priced and unpriced candidates is not a valid
/// response shape.
async fn price_candidates(
    state: &ApiState,
    start_time: DateTime<Utc>,
    candidates: &[Slot],
) -> Result<Vec<EndSlotResponse>, AppError> {
    let mut tasks = tokio::task::JoinSet::new();
    for candidate in candidates {
        let pricing = Arc::clone(&state.pricing);
        let index = candidate.index;
        let end_time = candidate.end_time;
        tasks.spawn(async move { (index, pricing.quote(start_time, end_time).await) });
    }

    let mut quotes: HashMap<usize, PriceQuote> = HashMap::with_capacity(candidates.len());
    while let Some(joined) = tasks.join_next().await {
        let (index, quoted) = joined.map_err(|e| {
            BookingError::Internal(Box::new(e))
        })?;

        match quoted {
            Ok(quote) => {
                quotes.insert(index, quote);
            }
            Err(err) => {
                tasks.abort_all();
                return Err(AppError(err));
            }
        }
    }

    candidates
        .iter()
        .map(|candidate| {
            quotes
                .remove(&candidate.index)
                .map(|quote| EndSlotResponse::from_slot(candidate, quote))
                .ok_or_else(|| {
                    AppError(BookingError::Internal(
                        "Missing price quote for end slot candidate".into(),
                    ))
                })
        })
        .collect()
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError(BookingError::Validation(format!(
            "Invalid date '{}'. Expected ISO format (YYYY-MM-DD)",
            value
        )))
    })
}

fn parse_iso_datetime(value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AppError(BookingError::Validation(format!(
                "Invalid start time '{}'. Expected ISO 8601 datetime",
                value
            )))
        })
}
