//! Application-level configuration.
//!
//! - [`ChatParams`]: request loop control (function-call rounds)

pub mod chat_params;

pub use chat_params::ChatParams;
