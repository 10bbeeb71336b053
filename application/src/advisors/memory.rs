//! Conversation memory advisor

use super::request::{DraftRequest, RememberedRequest};
use crate::ports::chat_memory::{ChatMemory, MemoryError};
use std::sync::Arc;
use support_domain::{ConversationId, Message};
use tracing::debug;

/// Attaches conversation history to a request and records the exchange.
pub struct MemoryAdvisor {
    memory: Arc<dyn ChatMemory>,
    default_retrieve_size: usize,
}

impl MemoryAdvisor {
    pub const DEFAULT_RETRIEVE_SIZE: usize = 100;

    pub fn new(memory: Arc<dyn ChatMemory>) -> Self {
        Self {
            memory,
            default_retrieve_size: Self::DEFAULT_RETRIEVE_SIZE,
        }
    }

    pub fn with_default_retrieve_size(mut self, size: usize) -> Self {
        self.default_retrieve_size = size;
        self
    }

    /// Read the last turns, then append the new user turn.
    pub async fn before(&self, draft: DraftRequest) -> Result<RememberedRequest, MemoryError> {
        let conversation_id = draft.params.conversation_id.unwrap_or_default();
        let retrieve_size = draft
            .params
            .retrieve_size
            .unwrap_or(self.default_retrieve_size);

        let history = self.memory.get(&conversation_id, retrieve_size).await?;
        debug!(
            conversation_id = %conversation_id,
            retrieve_size,
            turns = history.len(),
            "Loaded conversation history"
        );

        self.memory
            .add(&conversation_id, vec![Message::user(draft.user.clone())])
            .await?;

        Ok(RememberedRequest {
            system: draft.system,
            user: draft.user,
            conversation_id,
            retrieve_size,
            history,
        })
    }

    /// Store the complete assistant reply.
    pub async fn after(
        &self,
        conversation_id: &ConversationId,
        reply: &str,
    ) -> Result<(), MemoryError> {
        // blank replies (e.g. a stopped function-call loop) are not turns
        if reply.trim().is_empty() {
            debug!(conversation = %conversation_id, "Skipping empty assistant reply");
            return Ok(());
        }
        self.memory
            .add(conversation_id, vec![Message::assistant(reply)])
            .await
    }
}
