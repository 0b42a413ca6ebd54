use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string, Value};
use slipway_core::models::{
    booking::BookingType,
    occupancy::OccupancyInterval,
    pricing::PriceQuote,
    slot::{EndSlotResponse, GetEndSlotsResponse, Slot, SlotResponse},
};

fn sample_slot() -> Slot {
    Slot {
        index: 3,
        start_time: Utc.with_ymd_and_hms(2020, 2, 2, 6, 30, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2020, 2, 2, 6, 59, 59).unwrap(),
        available: true,
    }
}

#[test]
fn test_slot_response_includes_availability_when_requested() {
    let response = SlotResponse::from_slot(&sample_slot(), true);

    assert_eq!(response.index, 3);
    assert_eq!(response.available, Some(true));

    let json = to_string(&response).expect("Failed to serialize slot response");
    let value: Value = from_str(&json).unwrap();
    assert_eq!(value["available"], Value::Bool(true));
    assert_eq!(value["index"], Value::from(3));
}

#[test]
fn test_slot_response_omits_availability_when_not_requested() {
    let response = SlotResponse::from_slot(&sample_slot(), false);

    assert_eq!(response.available, None);

    // The field must be absent from the wire form, not null
    let json = to_string(&response).expect("Failed to serialize slot response");
    let value: Value = from_str(&json).unwrap();
    assert!(value.get("available").is_none());
}

#[test]
fn test_slot_response_timestamps_are_utc_camel_case() {
    let response = SlotResponse::from_slot(&sample_slot(), true);
    let json = to_string(&response).expect("Failed to serialize slot response");
    let value: Value = from_str(&json).unwrap();

    let start = value["startTime"].as_str().unwrap();
    assert!(start.starts_with("2020-02-02T06:30:00"));
    assert!(value["endTime"].as_str().is_some());
}

#[test]
fn test_occupancy_interval_serialization() {
    let occupancy = OccupancyInterval {
        start_time: Utc.with_ymd_and_hms(2020, 2, 2, 10, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2020, 2, 2, 11, 29, 59).unwrap(),
    };

    let json = to_string(&occupancy).expect("Failed to serialize occupancy");
    let deserialized: OccupancyInterval = from_str(&json).expect("Failed to deserialize occupancy");

    assert_eq!(deserialized, occupancy);

    let value: Value = from_str(&json).unwrap();
    assert!(value.get("startTime").is_some());
    assert!(value.get("endTime").is_some());
}

#[test]
fn test_price_quote_serialization() {
    let json = r#"{"totalAmount": 149.5, "currency": "EUR"}"#;
    let quote: PriceQuote = from_str(json).expect("Failed to deserialize price quote");

    assert_eq!(quote.total_amount, 149.5);
    assert_eq!(quote.currency, "EUR");
}

#[test]
fn test_end_slot_response_carries_quote() {
    let quote = PriceQuote {
        total_amount: 75.0,
        currency: "EUR".to_string(),
    };
    let response = EndSlotResponse::from_slot(&sample_slot(), quote);

    assert_eq!(response.index, 3);
    assert_eq!(response.total_amount, 75.0);
    assert_eq!(response.currency, "EUR");

    let envelope = GetEndSlotsResponse {
        end_slots: vec![response],
    };
    let json = to_string(&envelope).expect("Failed to serialize end slots response");
    let value: Value = from_str(&json).unwrap();
    assert_eq!(value["endSlots"][0]["totalAmount"], Value::from(75.0));
}

#[rstest]
#[case("CUSTOMER_BOOKING", BookingType::CustomerBooking)]
#[case("OWNER_BOOKING", BookingType::OwnerBooking)]
fn test_booking_type_round_trip(#[case] wire: &str, #[case] expected: BookingType) {
    let parsed: BookingType = wire.parse().expect("Failed to parse booking type");
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_string(), wire);

    let json = format!("\"{}\"", wire);
    let deserialized: BookingType = from_str(&json).expect("Failed to deserialize booking type");
    assert_eq!(deserialized, expected);
}

#[test]
fn test_booking_type_rejects_unknown_values() {
    let result = "CHARTER_BOOKING".parse::<BookingType>();

    match result {
        Err(slipway_core::errors::BookingError::Validation(message)) => {
            assert!(message.contains("CHARTER_BOOKING"));
        }
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}
