//! Process-local conversation memory
//!
//! Turns are kept per conversation id in insertion order and are lost when
//! the process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use support_application::{ChatMemory, MemoryError};
use support_domain::{ConversationId, Message};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryChatMemory {
    conversations: RwLock<HashMap<ConversationId, Vec<Message>>>,
}

impl InMemoryChatMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of conversations with at least one stored turn.
    pub async fn conversation_count(&self) -> usize {
        self.conversations.read().await.len()
    }
}

#[async_trait]
impl ChatMemory for InMemoryChatMemory {
    async fn add(
        &self,
        conversation_id: &ConversationId,
        messages: Vec<Message>,
    ) -> Result<(), MemoryError> {
        if messages.is_empty() {
            return Ok(());
        }
        self.conversations
            .write()
            .await
            .entry(conversation_id.clone())
            .or_default()
            .extend(messages);
        Ok(())
    }

    async fn get(
        &self,
        conversation_id: &ConversationId,
        last_n: usize,
    ) -> Result<Vec<Message>, MemoryError> {
        let conversations = self.conversations.read().await;
        let Some(turns) = conversations.get(conversation_id) else {
            return Ok(Vec::new());
        };
        let skip = turns.len().saturating_sub(last_n);
        Ok(turns[skip..].to_vec())
    }

    async fn clear(&self, conversation_id: &ConversationId) -> Result<(), MemoryError> {
        self.conversations.write().await.remove(conversation_id);
        Ok(())
    }
}
