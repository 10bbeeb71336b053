//! Domain layer for airline-support
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Conversation**: identified by a caller-supplied [`ConversationId`];
//!   its prior turns are [`Message`]s kept by the memory store.
//! - **Prompt**: the fixed support instructions ([`SupportPrompt`]) rendered
//!   from a [`PromptTemplate`], assembled with history, retrieved
//!   [`Document`]s and the user message into a [`Prompt`].
//! - **Tools**: functions the model may call ([`ToolDefinition`],
//!   [`ToolCall`], [`ToolResult`]); the only one offered is
//!   [`GET_BOOKING_DETAILS`].

pub mod booking;
pub mod config;
pub mod core;
pub mod prompt;
pub mod retrieval;
pub mod session;
pub mod tool;
pub mod util;

// Re-export commonly used types
pub use booking::{
    BookingClass, BookingDetails, BookingQuery, BookingStatus, GET_BOOKING_DETAILS,
};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{conversation_id::ConversationId, error::DomainError};
pub use prompt::{Prompt, PromptTemplate, SupportPrompt, TemplateError, TemplateParams};
pub use retrieval::{Document, RetrievedContext, SearchRequest};
pub use session::{
    entities::{Message, PromptMessage, Role},
    stream::{StopReason, StreamEvent},
};
pub use tool::{
    entities::{ToolCall, ToolCallParseError, ToolDefinition, ToolParameter, ToolSpec},
    value_objects::{ToolError, ToolResult},
};
