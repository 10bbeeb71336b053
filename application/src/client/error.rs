//! Chat client errors

use crate::ports::chat_memory::MemoryError;
use crate::ports::llm_gateway::GatewayError;
use crate::ports::vector_store::VectorStoreError;
use support_domain::{TemplateError, ToolCallParseError};
use thiserror::Error;

/// Errors raised while building a [`ChatClient`](super::ChatClient)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatClientError {
    #[error("Unknown function: {0} is not registered with the tool executor")]
    UnknownFunction(String),
}

/// Terminal error of a chat response stream.
///
/// Collaborator errors are wrapped as-is; the client never retries or
/// substitutes a reply.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Memory error: {0}")]
    Memory(#[from] MemoryError),

    #[error("Vector store error: {0}")]
    VectorStore(#[from] VectorStoreError),

    #[error("Malformed tool call: {0}")]
    MalformedToolCall(#[from] ToolCallParseError),
}
