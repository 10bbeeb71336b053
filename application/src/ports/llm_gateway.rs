//! LLM Gateway port
//!
//! Defines the interface for streaming chat completions from a model backend.

use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;
use support_domain::{PromptMessage, StreamEvent, ToolDefinition};
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// One backend turn: the full message list plus the functions the model may call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub messages: Vec<PromptMessage>,
    pub tools: Vec<ToolDefinition>,
}

impl ModelRequest {
    pub fn new(messages: Vec<PromptMessage>) -> Self {
        Self {
            messages,
            tools: Vec::new(),
        }
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }
}

/// Events of a single streamed backend turn.
///
/// Well-behaved gateways end the stream with exactly one
/// [`StreamEvent::Completed`]; a stream that simply ends is treated the same.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, GatewayError>> + Send>>;

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Start a streamed completion for `request`.
    async fn stream_chat(&self, request: ModelRequest) -> Result<EventStream, GatewayError>;

    /// Model identifier used for logging.
    fn model_name(&self) -> &str;
}
