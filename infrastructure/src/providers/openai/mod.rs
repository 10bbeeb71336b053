//! OpenAI-compatible model backend
//!
//! Streams chat completions over `POST {base_url}/v1/chat/completions` and
//! embeds text with `POST {base_url}/v1/embeddings`.

mod embedding;
mod gateway;
pub mod sse;
pub mod types;

pub use embedding::OpenAiEmbeddingModel;
pub use gateway::OpenAiGateway;

use crate::config::FileModelConfig;
use reqwest::StatusCode;

/// Connection settings shared by the chat and embedding clients.
#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub base_url: String,
    pub api_key: String,
    pub chat_model: String,
    pub embedding_model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl OpenAiSettings {
    /// `None` when no API key can be resolved.
    pub fn from_config(config: &FileModelConfig) -> Option<Self> {
        Some(Self {
            base_url: config.base_url.clone(),
            api_key: config.resolve_api_key()?,
            chat_model: config.chat_model.clone(),
            embedding_model: config.embedding_model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Status and message of a non-2xx response.
pub(crate) async fn failure(response: reqwest::Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    (status, types::error_message(&body))
}
