//! Booking lookup port

use async_trait::async_trait;
use support_domain::{BookingDetails, BookingQuery};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Booking service unavailable: {0}")]
    Unavailable(String),
}

/// Source of booking records
#[async_trait]
pub trait BookingDirectory: Send + Sync {
    /// Find the booking matching number and customer name.
    async fn find(&self, query: &BookingQuery) -> Result<BookingDetails, BookingError>;
}
