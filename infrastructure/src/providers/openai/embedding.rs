//! Embeddings client

use super::types::{EmbeddingRequest, EmbeddingResponse};
use super::{OpenAiSettings, failure};
use async_trait::async_trait;
use support_application::{EmbeddingError, EmbeddingModel};
use tracing::debug;

pub struct OpenAiEmbeddingModel {
    client: reqwest::Client,
    settings: OpenAiSettings,
}

impl OpenAiEmbeddingModel {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl EmbeddingModel for OpenAiEmbeddingModel {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            model = %self.settings.embedding_model,
            inputs = texts.len(),
            "Requesting embeddings"
        );

        let response = self
            .client
            .post(self.settings.endpoint("embeddings"))
            .bearer_auth(&self.settings.api_key)
            .json(&EmbeddingRequest {
                model: &self.settings.embedding_model,
                input: texts,
            })
            .send()
            .await
            .map_err(|e| EmbeddingError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = failure(response).await;
            return Err(EmbeddingError::RequestFailed(format!("{}: {}", status, message)));
        }

        let vectors = response
            .json::<EmbeddingResponse>()
            .await
            .map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?
            .into_vectors();

        if vectors.len() != texts.len() {
            return Err(EmbeddingError::InvalidResponse(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                vectors.len()
            )));
        }

        Ok(vectors)
    }
}
