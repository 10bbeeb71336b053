//! Seeded in-memory booking directory for demos and local runs

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use support_application::{BookingDirectory, BookingError};
use support_domain::{BookingClass, BookingDetails, BookingQuery, BookingStatus};

/// Five bookings, numbered 101 to 105, departing on consecutive
/// odd days after the seed date.
pub struct DemoBookingDirectory {
    bookings: HashMap<String, BookingDetails>,
}

const SEED: [(&str, &str, &str, &str, BookingClass); 5] = [
    ("John", "Doe", "LAX", "SFO", BookingClass::Economy),
    ("Jane", "Smith", "JFK", "ORD", BookingClass::PremiumEconomy),
    ("Michael", "Johnson", "SEA", "DEN", BookingClass::Business),
    ("Sarah", "Williams", "BOS", "MIA", BookingClass::Economy),
    ("Robert", "Taylor", "ATL", "LHR", BookingClass::Business),
];

impl DemoBookingDirectory {
    pub fn seeded(today: NaiveDate) -> Self {
        let bookings = SEED
            .iter()
            .enumerate()
            .map(|(i, (first, last, from, to, class))| {
                let number = (101 + i).to_string();
                let offset = 2 * i as u64 + 1;
                let booking = BookingDetails {
                    booking_number: number.clone(),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                    date: today.checked_add_days(Days::new(offset)).unwrap_or(today),
                    booking_status: BookingStatus::Confirmed,
                    from: from.to_string(),
                    to: to.to_string(),
                    booking_class: *class,
                };
                (number, booking)
            })
            .collect();
        Self { bookings }
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[async_trait]
impl BookingDirectory for DemoBookingDirectory {
    async fn find(&self, query: &BookingQuery) -> Result<BookingDetails, BookingError> {
        // A wrong name must look the same as an unknown number
        self.bookings
            .get(&query.booking_number)
            .filter(|booking| query.matches(booking))
            .cloned()
            .ok_or_else(|| BookingError::NotFound(query.booking_number.clone()))
    }
}
