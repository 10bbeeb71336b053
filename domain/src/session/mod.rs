//! Conversation session domain.
//!
//! - [`entities::Message`]: a persisted conversation turn
//! - [`entities::PromptMessage`]: a message exchanged with the model backend
//! - [`stream::StreamEvent`]: one event of a streamed backend turn

pub mod entities;
pub mod stream;
