use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Kind of booking being quoted or listed.
///
/// Customer bookings carry a minimum duration of two slots (one hour);
/// owner bookings have no duration floor here, any further differences are
/// the pricing service's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingType {
    CustomerBooking,
    OwnerBooking,
}

impl FromStr for BookingType {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER_BOOKING" => Ok(BookingType::CustomerBooking),
            "OWNER_BOOKING" => Ok(BookingType::OwnerBooking),
            other => Err(BookingError::Validation(format!(
                "Invalid booking type '{}'. Must be CUSTOMER_BOOKING or OWNER_BOOKING",
                other
            ))),
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingType::CustomerBooking => write!(f, "CUSTOMER_BOOKING"),
            BookingType::OwnerBooking => write!(f, "OWNER_BOOKING"),
        }
    }
}
