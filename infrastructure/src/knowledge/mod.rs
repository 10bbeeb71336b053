//! Knowledge base: text splitting and ingestion into the vector store

mod loader;
mod splitter;

pub use loader::{KnowledgeError, KnowledgeLoader};
pub use splitter::TextSplitter;
