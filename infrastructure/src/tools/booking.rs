//! `getBookingDetails` function

use super::registry::Function;
use async_trait::async_trait;
use std::sync::Arc;
use support_application::{BookingDirectory, BookingError};
use support_domain::{
    BookingQuery, GET_BOOKING_DETAILS, ToolCall, ToolDefinition, ToolError, ToolParameter,
    ToolResult,
};
use tracing::debug;

/// Looks up a booking by number and customer name.
///
/// On success the output is the booking serialized as camelCase JSON.
pub struct BookingDetailsFunction {
    directory: Arc<dyn BookingDirectory>,
}

impl BookingDetailsFunction {
    pub fn new(directory: Arc<dyn BookingDirectory>) -> Self {
        Self { directory }
    }

    fn query(call: &ToolCall) -> Result<BookingQuery, ToolError> {
        let number = call
            .require_string("bookingNumber")
            .map_err(ToolError::invalid_argument)?;
        let first = call
            .require_string("firstName")
            .map_err(ToolError::invalid_argument)?;
        let last = call
            .require_string("lastName")
            .map_err(ToolError::invalid_argument)?;
        BookingQuery::new(number, first, last).map_err(|e| ToolError::invalid_argument(e.to_string()))
    }
}

#[async_trait]
impl Function for BookingDetailsFunction {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(GET_BOOKING_DETAILS, "Get booking details")
            .with_parameter(ToolParameter::new("bookingNumber", "Booking number", true))
            .with_parameter(ToolParameter::new("firstName", "Customer first name", true))
            .with_parameter(ToolParameter::new("lastName", "Customer last name", true))
    }

    async fn call(&self, call: &ToolCall) -> ToolResult {
        let query = match Self::query(call) {
            Ok(query) => query,
            Err(error) => return ToolResult::failure(&call.name, error),
        };

        debug!(booking = %query.booking_number, "Looking up booking");

        match self.directory.find(&query).await {
            Ok(details) => match serde_json::to_string(&details) {
                Ok(json) => ToolResult::success(&call.name, json),
                Err(e) => ToolResult::failure(&call.name, ToolError::execution_failed(e.to_string())),
            },
            Err(BookingError::NotFound(number)) => ToolResult::failure(
                &call.name,
                ToolError::not_found(format!("Booking {}", number)),
            ),
            Err(e @ BookingError::Unavailable(_)) => {
                ToolResult::failure(&call.name, ToolError::execution_failed(e.to_string()))
            }
        }
    }
}
