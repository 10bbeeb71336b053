//! Knowledge base ingestion
//!
//! Reads a plain-text document, splits it into chunks and adds them to a
//! vector store. [`KnowledgeLoader::open_store`] also handles the saved-store
//! shortcut so startup does not re-embed an unchanged knowledge base.

use super::splitter::TextSplitter;
use crate::config::FileKnowledgeConfig;
use crate::vector_store::SimpleVectorStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use support_application::{EmbeddingModel, VectorStore, VectorStoreError};
use support_domain::Document;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] VectorStoreError),
}

#[derive(Debug, Clone, Copy)]
pub struct KnowledgeLoader {
    splitter: TextSplitter,
}

impl KnowledgeLoader {
    pub fn new(splitter: TextSplitter) -> Self {
        Self { splitter }
    }

    pub fn from_config(config: &FileKnowledgeConfig) -> Self {
        Self::new(TextSplitter::new(config.chunk_size, config.chunk_overlap))
    }

    /// Chunk a file into documents tagged with their source and position.
    pub async fn load_file(&self, path: &Path) -> Result<Vec<Document>, KnowledgeError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| KnowledgeError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let source = path.display().to_string();
        Ok(self
            .splitter
            .split(&text)
            .into_iter()
            .enumerate()
            .map(|(i, chunk)| {
                Document::new(chunk)
                    .with_metadata("source", source.clone())
                    .with_metadata("chunk", i.to_string())
            })
            .collect())
    }

    /// Add the chunks of `path` to `store`, returning the chunk count.
    pub async fn ingest(
        &self,
        store: &dyn VectorStore,
        path: &Path,
    ) -> Result<usize, KnowledgeError> {
        let documents = self.load_file(path).await?;
        let count = documents.len();
        store.add(documents).await?;
        info!(path = %path.display(), chunks = count, "Ingested knowledge file");
        Ok(count)
    }

    /// Build the knowledge store described by `config`.
    ///
    /// A saved store at `store_path` is loaded as is. Otherwise the knowledge
    /// file is ingested (a missing file leaves the store empty) and the result
    /// is saved to `store_path` when one is configured.
    pub async fn open_store(
        config: &FileKnowledgeConfig,
        embedding_model: Arc<dyn EmbeddingModel>,
    ) -> Result<SimpleVectorStore, KnowledgeError> {
        let store_path = config.store_path.as_ref().map(PathBuf::from);

        if let Some(path) = &store_path {
            if tokio::fs::try_exists(path).await.unwrap_or(false) {
                return Ok(SimpleVectorStore::load(path, embedding_model).await?);
            }
        }

        let store = SimpleVectorStore::new(embedding_model);
        let knowledge_path = Path::new(&config.path);
        if tokio::fs::try_exists(knowledge_path).await.unwrap_or(false) {
            Self::from_config(config).ingest(&store, knowledge_path).await?;
            if let Some(path) = &store_path {
                store.save(path).await?;
            }
        } else {
            warn!(path = %knowledge_path.display(), "Knowledge file not found; starting with an empty store");
        }

        Ok(store)
    }
}
