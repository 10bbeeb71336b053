//! Chat memory port
//!
//! Stores the ordered turns of each conversation.

use async_trait::async_trait;
use support_domain::{ConversationId, Message};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Memory storage error: {0}")]
    Storage(String),
}

/// Per-conversation turn log.
///
/// Ordering of concurrent writes for one conversation is the implementation's
/// responsibility.
#[async_trait]
pub trait ChatMemory: Send + Sync {
    /// Append turns to the end of the conversation.
    async fn add(
        &self,
        conversation_id: &ConversationId,
        messages: Vec<Message>,
    ) -> Result<(), MemoryError>;

    /// The last `last_n` turns, oldest first.
    async fn get(
        &self,
        conversation_id: &ConversationId,
        last_n: usize,
    ) -> Result<Vec<Message>, MemoryError>;

    /// Forget the conversation.
    async fn clear(&self, conversation_id: &ConversationId) -> Result<(), MemoryError>;
}
