//! Booking directory adapters

mod demo;

pub use demo::DemoBookingDirectory;
