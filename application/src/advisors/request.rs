//! Request shapes passed between advisor stages.
//!
//! Each stage consumes the previous stage's output, so the order
//! memory → retrieval → logging cannot be changed by accident.

use support_domain::{ConversationId, Message, Prompt, RetrievedContext};

/// Advisor parameter key for the conversation id.
pub const CHAT_MEMORY_CONVERSATION_ID_KEY: &str = "chat_memory_conversation_id";
/// Advisor parameter key for the number of history turns to retrieve.
pub const CHAT_MEMORY_RETRIEVE_SIZE_KEY: &str = "chat_memory_response_size";
/// Conversation used when a request names none.
pub const DEFAULT_CHAT_MEMORY_CONVERSATION_ID: &str = "default";

/// Per-request advisor settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisorParams {
    pub conversation_id: Option<ConversationId>,
    pub retrieve_size: Option<usize>,
}

impl AdvisorParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation_id(mut self, id: ConversationId) -> Self {
        self.conversation_id = Some(id);
        self
    }

    pub fn retrieve_size(mut self, size: usize) -> Self {
        self.retrieve_size = Some(size);
        self
    }
}

/// A request before any advisor ran: rendered system text and user text.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftRequest {
    pub system: String,
    pub user: String,
    pub params: AdvisorParams,
}

/// A request with its conversation history attached.
#[derive(Debug, Clone, PartialEq)]
pub struct RememberedRequest {
    pub system: String,
    pub user: String,
    pub conversation_id: ConversationId,
    pub retrieve_size: usize,
    /// Prior turns, oldest first. Excludes the current user message.
    pub history: Vec<Message>,
}

/// A request ready for the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundedRequest {
    pub system: String,
    pub user: String,
    pub conversation_id: ConversationId,
    pub retrieve_size: usize,
    pub history: Vec<Message>,
    pub context: RetrievedContext,
}

impl GroundedRequest {
    /// The assembled prompt in fixed segment order.
    pub fn prompt(&self) -> Prompt {
        Prompt::new(self.system.clone(), self.user.clone())
            .with_history(self.history.clone())
            .with_context(self.context.documents.clone())
    }
}
