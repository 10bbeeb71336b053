//! Vector store port
//!
//! Similarity index over knowledge documents.

use super::embedding::EmbeddingError;
use async_trait::async_trait;
use support_domain::{Document, SearchRequest};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VectorStoreError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("Vector store I/O error: {0}")]
    Io(String),

    #[error("Vector store serialization error: {0}")]
    Serialization(String),
}

#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Index documents.
    async fn add(&self, documents: Vec<Document>) -> Result<(), VectorStoreError>;

    /// Documents most similar to `request.query`, best first, each carrying its score.
    async fn similarity_search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Document>, VectorStoreError>;
}
