//! Application layer for airline-support
//!
//! This crate contains the chat client, the advisor pipeline, the customer
//! support use case and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod advisors;
pub mod client;
pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use advisors::{
    AdvisorParams, AdvisorPipeline, LoggingAdvisor, MemoryAdvisor, QuestionAnswerAdvisor,
};
pub use client::{ChatClient, ChatClientBuilder, ChatClientError, ChatError, ChatResponseStream};
pub use config::ChatParams;
pub use ports::{
    booking_directory::{BookingDirectory, BookingError},
    chat_memory::{ChatMemory, MemoryError},
    clock::{Clock, FixedClock, SystemClock},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    embedding::{EmbeddingError, EmbeddingModel},
    llm_gateway::{EventStream, GatewayError, LlmGateway, ModelRequest},
    tool_executor::ToolExecutorPort,
    vector_store::{VectorStore, VectorStoreError},
};
pub use use_cases::customer_support::CustomerSupportAssistant;
