//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid conversation id: {0}")]
    InvalidConversationId(String),

    #[error("Invalid booking number: {0}")]
    InvalidBookingNumber(String),
}
