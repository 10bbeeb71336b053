//! Customer support chat use case.
//!
//! [`CustomerSupportAssistant`] configures a [`ChatClient`] once with the
//! airline instructions, the advisor pipeline and the booking lookup
//! function, then answers chat messages as reply streams.

use crate::advisors::{
    AdvisorParams, AdvisorPipeline, LoggingAdvisor, MemoryAdvisor, QuestionAnswerAdvisor,
};
use crate::client::{ChatClient, ChatClientBuilder, ChatClientError, ChatResponseStream};
use crate::ports::chat_memory::ChatMemory;
use crate::ports::vector_store::VectorStore;
use std::sync::Arc;
use support_domain::{ConversationId, GET_BOOKING_DETAILS, SearchRequest, SupportPrompt};
use tracing::debug;

/// Airline customer-support chat service.
///
/// Shared freely across tasks; `chat` may be called concurrently.
#[derive(Clone)]
pub struct CustomerSupportAssistant {
    chat_client: ChatClient,
}

impl CustomerSupportAssistant {
    /// History turns loaded for every request.
    pub const RETRIEVE_SIZE: usize = 100;

    pub fn new(
        builder: ChatClientBuilder,
        vector_store: Arc<dyn VectorStore>,
        chat_memory: Arc<dyn ChatMemory>,
    ) -> Result<Self, ChatClientError> {
        let logger = builder.logger();
        let chat_client = builder
            .default_system(SupportPrompt::system_template())
            .default_advisors(AdvisorPipeline::new(
                MemoryAdvisor::new(chat_memory),
                QuestionAnswerAdvisor::new(vector_store, SearchRequest::defaults()),
                LoggingAdvisor::new(logger),
            ))
            .default_functions([GET_BOOKING_DETAILS])
            .build()?;

        Ok(Self { chat_client })
    }

    /// Answer `user_message` within the conversation `conversation_id`.
    ///
    /// The date is taken now; everything else happens when the returned
    /// stream is first polled.
    pub fn chat(&self, conversation_id: &ConversationId, user_message: &str) -> ChatResponseStream {
        let today = self.chat_client.clock().today();
        debug!(conversation_id = %conversation_id, %today, "Chat message received");

        self.chat_client
            .prompt()
            .system_params(SupportPrompt::date_params(today))
            .user(user_message)
            .advisor_params(
                AdvisorParams::new()
                    .conversation_id(conversation_id.clone())
                    .retrieve_size(Self::RETRIEVE_SIZE),
            )
            .stream()
    }
}
