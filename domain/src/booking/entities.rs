//! Booking entities exposed to the model through `getBookingDetails`

use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Registered name of the booking lookup function.
pub const GET_BOOKING_DETAILS: &str = "getBookingDetails";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingClass {
    Economy,
    PremiumEconomy,
    Business,
}

/// Booking as reported back to the model (camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub booking_number: String,
    pub first_name: String,
    pub last_name: String,
    pub date: NaiveDate,
    pub booking_status: BookingStatus,
    pub from: String,
    pub to: String,
    pub booking_class: BookingClass,
}

/// Lookup key: the booking number plus the customer's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuery {
    pub booking_number: String,
    pub first_name: String,
    pub last_name: String,
}

impl BookingQuery {
    pub fn new(
        booking_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let booking_number = booking_number.into().trim().to_string();
        if booking_number.is_empty() {
            return Err(DomainError::InvalidBookingNumber(
                "booking number must not be empty".to_string(),
            ));
        }
        Ok(Self {
            booking_number,
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
        })
    }

    /// Whether the query names the customer who owns `booking` (case-insensitive).
    pub fn matches(&self, booking: &BookingDetails) -> bool {
        self.booking_number == booking.booking_number
            && self.first_name.eq_ignore_ascii_case(&booking.first_name)
            && self.last_name.eq_ignore_ascii_case(&booking.last_name)
    }
}
