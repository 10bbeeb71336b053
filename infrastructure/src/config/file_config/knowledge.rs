//! Knowledge base configuration from TOML (`[knowledge]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKnowledgeConfig {
    /// Text file indexed at startup
    pub path: String,
    /// Maximum characters per chunk
    pub chunk_size: usize,
    /// Characters repeated between consecutive chunks
    pub chunk_overlap: usize,
    /// Saved vector store; loaded instead of re-embedding when present
    pub store_path: Option<String>,
}

impl Default for FileKnowledgeConfig {
    fn default() -> Self {
        Self {
            path: "knowledge/terms-of-service.txt".to_string(),
            chunk_size: 800,
            chunk_overlap: 100,
            store_path: None,
        }
    }
}
