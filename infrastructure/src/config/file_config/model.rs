//! Model backend configuration from TOML (`[model]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Base URL of the API (without `/v1`).
    pub base_url: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// Chat completion model.
    pub chat_model: String,
    /// Embedding model used for the knowledge index.
    pub embedding_model: String,
    pub temperature: f32,
    /// Max tokens per response; backend default when unset.
    pub max_tokens: Option<u32>,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            chat_model: "gpt-4o".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
            temperature: 0.7,
            max_tokens: None,
        }
    }
}

impl FileModelConfig {
    /// The configured key, falling back to the `api_key_env` variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}
