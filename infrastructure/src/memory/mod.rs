//! Conversation memory stores

mod in_memory;

pub use in_memory::InMemoryChatMemory;
