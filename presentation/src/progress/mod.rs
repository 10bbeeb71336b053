//! Progress indication while waiting for the assistant

pub mod reporter;
