//! Logging advisor: observes requests and replies, never alters them

use super::request::{
    CHAT_MEMORY_CONVERSATION_ID_KEY, CHAT_MEMORY_RETRIEVE_SIZE_KEY, GroundedRequest,
};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use std::sync::Arc;
use support_domain::util::preview;
use tracing::info;

pub struct LoggingAdvisor {
    logger: Arc<dyn ConversationLogger>,
}

impl LoggingAdvisor {
    pub fn new(logger: Arc<dyn ConversationLogger>) -> Self {
        Self { logger }
    }

    pub fn observe_request(&self, request: &GroundedRequest) {
        info!(
            conversation_id = %request.conversation_id,
            history = request.history.len(),
            context = request.context.len(),
            "Chat request: {}",
            preview(&request.user, 120)
        );
        self.logger.log(ConversationEvent::new(
            "chat_request",
            serde_json::json!({
                "user": request.user,
                "history_turns": request.history.len(),
                "context_documents": request.context.len(),
                "advisor_params": {
                    CHAT_MEMORY_CONVERSATION_ID_KEY: request.conversation_id.as_str(),
                    CHAT_MEMORY_RETRIEVE_SIZE_KEY: request.retrieve_size,
                },
            }),
        ));
    }

    pub fn observe_response(&self, request: &GroundedRequest, reply: &str) {
        info!(
            conversation_id = %request.conversation_id,
            bytes = reply.len(),
            "Chat response: {}",
            preview(reply, 120)
        );
        self.logger.log(ConversationEvent::new(
            "chat_response",
            serde_json::json!({
                "conversation_id": request.conversation_id.as_str(),
                "bytes": reply.len(),
                "text": reply,
            }),
        ));
    }
}

impl Default for LoggingAdvisor {
    fn default() -> Self {
        Self::new(Arc::new(NoConversationLogger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CollectingLogger;
    use support_domain::{ConversationId, RetrievedContext};

    fn request() -> GroundedRequest {
        GroundedRequest {
            system: "rules".to_string(),
            user: "status of 551?".to_string(),
            conversation_id: ConversationId::new("abc123").unwrap(),
            retrieve_size: 100,
            history: vec![],
            context: RetrievedContext::default(),
        }
    }

    #[test]
    fn test_request_event_carries_advisor_params() {
        let logger = Arc::new(CollectingLogger::default());
        let advisor = LoggingAdvisor::new(logger.clone());
        let req = request();

        advisor.observe_request(&req);

        let events = logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "chat_request");
        assert_eq!(
            events[0].1["advisor_params"]["chat_memory_conversation_id"],
            "abc123"
        );
        assert_eq!(events[0].1["advisor_params"]["chat_memory_response_size"], 100);
        // unchanged
        assert_eq!(req, request());
    }

    #[test]
    fn test_response_event() {
        let logger = Arc::new(CollectingLogger::default());
        let advisor = LoggingAdvisor::new(logger.clone());
        advisor.observe_response(&request(), "Booking 551 is confirmed.");

        let events = logger.events();
        assert_eq!(events[0].0, "chat_response");
        assert_eq!(events[0].1["text"], "Booking 551 is confirmed.");
    }
}
