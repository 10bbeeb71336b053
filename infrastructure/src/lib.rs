//! Infrastructure layer for airline-support
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and knowledge-base ingestion.

pub mod booking;
pub mod config;
pub mod knowledge;
pub mod logging;
pub mod memory;
pub mod providers;
pub mod tools;
pub mod vector_store;

// Re-export commonly used types
pub use booking::DemoBookingDirectory;
pub use config::{
    ConfigLoader, FileChatConfig, FileConfig, FileKnowledgeConfig, FileLoggingConfig,
    FileModelConfig, FileReplConfig,
};
pub use knowledge::{KnowledgeError, KnowledgeLoader, TextSplitter};
pub use logging::JsonlConversationLogger;
pub use memory::InMemoryChatMemory;
pub use providers::openai::{OpenAiEmbeddingModel, OpenAiGateway, OpenAiSettings};
pub use tools::{BookingDetailsFunction, Function, FunctionRegistry, JsonSchemaToolConverter};
pub use vector_store::SimpleVectorStore;
