//! In-process vector store with brute-force cosine search
//!
//! Documents are embedded on insert. The whole store can be saved to and
//! loaded from a JSON file so the knowledge base is not re-embedded on
//! every start.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::Path;
use std::sync::Arc;
use support_application::{EmbeddingModel, VectorStore, VectorStoreError};
use support_domain::{Document, SearchRequest};
use tokio::sync::RwLock;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    document: Document,
    embedding: Vec<f32>,
}

pub struct SimpleVectorStore {
    embedding_model: Arc<dyn EmbeddingModel>,
    entries: RwLock<Vec<StoredEntry>>,
}

impl SimpleVectorStore {
    pub fn new(embedding_model: Arc<dyn EmbeddingModel>) -> Self {
        Self {
            embedding_model,
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Write every document and its embedding as JSON.
    pub async fn save(&self, path: &Path) -> Result<(), VectorStoreError> {
        let json = {
            let entries = self.entries.read().await;
            serde_json::to_vec(&*entries)
                .map_err(|e| VectorStoreError::Serialization(e.to_string()))?
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| VectorStoreError::Io(e.to_string()))?;
            }
        }
        tokio::fs::write(path, json)
            .await
            .map_err(|e| VectorStoreError::Io(e.to_string()))?;

        info!(path = %path.display(), "Saved vector store");
        Ok(())
    }

    /// Restore a store written by [`save`](Self::save).
    pub async fn load(
        path: &Path,
        embedding_model: Arc<dyn EmbeddingModel>,
    ) -> Result<Self, VectorStoreError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| VectorStoreError::Io(format!("{}: {}", path.display(), e)))?;
        let entries: Vec<StoredEntry> = serde_json::from_slice(&bytes)
            .map_err(|e| VectorStoreError::Serialization(e.to_string()))?;

        info!(path = %path.display(), documents = entries.len(), "Loaded vector store");
        Ok(Self {
            embedding_model,
            entries: RwLock::new(entries),
        })
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorStore for SimpleVectorStore {
    async fn add(&self, documents: Vec<Document>) -> Result<(), VectorStoreError> {
        if documents.is_empty() {
            return Ok(());
        }

        let texts: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
        let embeddings = self.embedding_model.embed(&texts).await?;

        let mut entries = self.entries.write().await;
        for (document, embedding) in documents.into_iter().zip(embeddings) {
            // same id means same content
            entries.retain(|e| e.document.id != document.id);
            entries.push(StoredEntry {
                document,
                embedding,
            });
        }

        debug!(total = entries.len(), "Added documents to vector store");
        Ok(())
    }

    async fn similarity_search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Document>, VectorStoreError> {
        if request.top_k == 0 || self.is_empty().await {
            return Ok(Vec::new());
        }

        let query = self.embedding_model.embed_one(&request.query).await?;
        let accept_all = request.similarity_threshold <= SearchRequest::SIMILARITY_THRESHOLD_ACCEPT_ALL;

        let entries = self.entries.read().await;
        let mut scored: Vec<(f32, &StoredEntry)> = entries
            .iter()
            .map(|entry| (cosine_similarity(&query, &entry.embedding), entry))
            .filter(|(score, _)| accept_all || *score >= request.similarity_threshold)
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(request.top_k)
            .map(|(score, entry)| entry.document.clone().with_score(score))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_application::EmbeddingError;

    const AXES: [&str; 3] = ["baggage", "refund", "seat"];

    /// Counts axis keywords, so documents about the same topic point the same way.
    struct KeywordEmbedding;

    #[async_trait]
    impl EmbeddingModel for KeywordEmbedding {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts
                .iter()
                .map(|text| {
                    let lower = text.to_lowercase();
                    AXES.iter()
                        .map(|axis| lower.matches(axis).count() as f32)
                        .collect()
                })
                .collect())
        }
    }

    async fn seeded() -> SimpleVectorStore {
        let store = SimpleVectorStore::new(Arc::new(KeywordEmbedding));
        store
            .add(vec![
                Document::new("Checked baggage allowance is 23kg per baggage item."),
                Document::new("A refund is issued within 7 days."),
                Document::new("Seat changes are free in Business."),
            ])
            .await
            .unwrap();
        store
    }

    #[test]
    fn test_cosine_similarity() {
        assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
        assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-6);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 0.0]), 0.0);
    }

    #[tokio::test]
    async fn test_search_ranks_by_similarity() {
        let store = seeded().await;
        let results = store
            .similarity_search(&SearchRequest::defaults().with_query("How much baggage?"))
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[0].content.contains("baggage"));
        assert!(results[0].score.unwrap() > results[1].score.unwrap_or(0.0));
    }

    #[tokio::test]
    async fn test_threshold_and_top_k() {
        let store = seeded().await;
        let request = SearchRequest::defaults()
            .with_query("refund please")
            .with_similarity_threshold(0.5);
        let results = store.similarity_search(&request).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].content.contains("refund"));

        let request = SearchRequest::defaults().with_query("anything").with_top_k(2);
        assert_eq!(store.similarity_search(&request).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_content_is_replaced() {
        let store = seeded().await;
        store
            .add(vec![Document::new("A refund is issued within 7 days.")])
            .await
            .unwrap();
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_empty_store_returns_nothing() {
        let store = SimpleVectorStore::new(Arc::new(KeywordEmbedding));
        let results = store
            .similarity_search(&SearchRequest::defaults().with_query("baggage"))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index").join("store.json");

        seeded().await.save(&path).await.unwrap();
        let loaded = SimpleVectorStore::load(&path, Arc::new(KeywordEmbedding))
            .await
            .unwrap();

        assert_eq!(loaded.len().await, 3);
        let results = loaded
            .similarity_search(&SearchRequest::defaults().with_query("seat").with_top_k(1))
            .await
            .unwrap();
        assert!(results[0].content.contains("Seat"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result =
            SimpleVectorStore::load(Path::new("/nonexistent/store.json"), Arc::new(KeywordEmbedding))
                .await;
        assert!(matches!(result, Err(VectorStoreError::Io(_))));
    }
}
