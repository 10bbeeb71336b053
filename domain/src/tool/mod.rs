//! Tool domain module
//!
//! Functions the model may call during a chat request.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ ToolSpec     │───▶│ ToolCall     │───▶│ ToolResult   │
//! │ (offered)    │    │ (requested)  │    │ (answered)   │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! The domain only describes functions. Execution sits behind the
//! application layer's `ToolExecutorPort`; the infrastructure registry
//! implements it.

pub mod entities;
pub mod value_objects;

pub use entities::{ToolCall, ToolCallParseError, ToolDefinition, ToolParameter, ToolSpec};
pub use value_objects::{ToolError, ToolResult};
