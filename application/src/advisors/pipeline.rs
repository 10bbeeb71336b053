//! The ordered advisor chain

use super::logging::LoggingAdvisor;
use super::memory::MemoryAdvisor;
use super::request::{DraftRequest, GroundedRequest};
use super::retrieval::QuestionAnswerAdvisor;
use crate::client::ChatError;

/// Memory, then retrieval, then logging.
pub struct AdvisorPipeline {
    memory: MemoryAdvisor,
    retrieval: QuestionAnswerAdvisor,
    logging: LoggingAdvisor,
}

impl AdvisorPipeline {
    pub fn new(
        memory: MemoryAdvisor,
        retrieval: QuestionAnswerAdvisor,
        logging: LoggingAdvisor,
    ) -> Self {
        Self {
            memory,
            retrieval,
            logging,
        }
    }

    /// Run the request side of every advisor.
    pub async fn advise(&self, draft: DraftRequest) -> Result<GroundedRequest, ChatError> {
        let remembered = self.memory.before(draft).await?;
        let grounded = self.retrieval.before(remembered).await?;
        self.logging.observe_request(&grounded);
        Ok(grounded)
    }

    /// Run the response side once the reply is complete.
    pub async fn complete(&self, request: &GroundedRequest, reply: &str) -> Result<(), ChatError> {
        self.memory.after(&request.conversation_id, reply).await?;
        self.logging.observe_response(request, reply);
        Ok(())
    }
}
