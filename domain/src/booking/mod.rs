//! Airline booking domain

pub mod entities;

pub use entities::{
    BookingClass, BookingDetails, BookingQuery, BookingStatus, GET_BOOKING_DETAILS,
};
