//! Functions the model can call
//!
//! - `registry`: [`FunctionRegistry`], the [`ToolExecutorPort`] implementation
//! - `booking`: `getBookingDetails`
//! - `schema`: JSON Schema for the backend's `tools` array
//!
//! [`ToolExecutorPort`]: support_application::ToolExecutorPort

mod booking;
mod registry;
mod schema;

pub use booking::BookingDetailsFunction;
pub use registry::{Function, FunctionRegistry};
pub use schema::JsonSchemaToolConverter;
