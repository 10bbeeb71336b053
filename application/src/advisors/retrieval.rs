//! Question-answer advisor: grounds the request in retrieved knowledge

use super::request::{GroundedRequest, RememberedRequest};
use crate::ports::vector_store::{VectorStore, VectorStoreError};
use std::sync::Arc;
use support_domain::{RetrievedContext, SearchRequest};
use tracing::debug;

pub struct QuestionAnswerAdvisor {
    store: Arc<dyn VectorStore>,
    search: SearchRequest,
}

impl QuestionAnswerAdvisor {
    /// `search` supplies top-k and threshold; its query is replaced per request.
    pub fn new(store: Arc<dyn VectorStore>, search: SearchRequest) -> Self {
        Self { store, search }
    }

    pub fn search_parameters(&self) -> &SearchRequest {
        &self.search
    }

    pub async fn before(
        &self,
        request: RememberedRequest,
    ) -> Result<GroundedRequest, VectorStoreError> {
        let search = self.search.clone().with_query(request.user.clone());
        let documents = self.store.similarity_search(&search).await?;
        debug!(
            top_k = search.top_k,
            threshold = search.similarity_threshold,
            hits = documents.len(),
            "Retrieved context"
        );

        Ok(GroundedRequest {
            system: request.system,
            user: request.user,
            conversation_id: request.conversation_id,
            retrieve_size: request.retrieve_size,
            history: request.history,
            context: RetrievedContext::new(documents),
        })
    }
}
