//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod booking_directory;
pub mod chat_memory;
pub mod clock;
pub mod conversation_logger;
pub mod embedding;
pub mod llm_gateway;
pub mod tool_executor;
pub mod vector_store;
