//! Retrieval entities: knowledge documents and search parameters

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A chunk of knowledge stored in the similarity index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Similarity score, set on search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl Document {
    /// Create a document with a content-derived id.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let id = content_id(&content);
        Self {
            id,
            content,
            metadata: BTreeMap::new(),
            score: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = Some(score);
        self
    }
}

// FNV-1a, stable across runs so persisted stores keep their ids
fn content_id(content: &str) -> String {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in content.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    format!("{hash:016x}")
}

/// Parameters of a similarity search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: usize,
    /// Minimum similarity in `[0.0, 1.0]`; `0.0` accepts everything
    pub similarity_threshold: f32,
}

impl SearchRequest {
    pub const DEFAULT_TOP_K: usize = 4;
    pub const SIMILARITY_THRESHOLD_ACCEPT_ALL: f32 = 0.0;

    /// Default parameters with an empty query; the query is filled per request.
    pub fn defaults() -> Self {
        Self {
            query: String::new(),
            top_k: Self::DEFAULT_TOP_K,
            similarity_threshold: Self::SIMILARITY_THRESHOLD_ACCEPT_ALL,
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f32) -> Self {
        self.similarity_threshold = threshold;
        self
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Snippets retrieved for one request, most relevant first. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RetrievedContext {
    pub documents: Vec<Document>,
}

impl RetrievedContext {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}
