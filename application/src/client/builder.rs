//! Chat client configuration

use super::chat_client::{ChatClient, ClientInner};
use super::error::ChatClientError;
use crate::advisors::AdvisorPipeline;
use crate::config::ChatParams;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::tool_executor::ToolExecutorPort;
use std::sync::Arc;
use support_domain::PromptTemplate;
use tracing::debug;

/// Collects the defaults every request of a [`ChatClient`] shares.
pub struct ChatClientBuilder {
    gateway: Arc<dyn LlmGateway>,
    tool_executor: Arc<dyn ToolExecutorPort>,
    system: PromptTemplate,
    advisors: Option<AdvisorPipeline>,
    functions: Vec<String>,
    clock: Arc<dyn Clock>,
    params: ChatParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatClientBuilder {
    pub fn new(gateway: Arc<dyn LlmGateway>, tool_executor: Arc<dyn ToolExecutorPort>) -> Self {
        Self {
            gateway,
            tool_executor,
            system: PromptTemplate::new(""),
            advisors: None,
            functions: Vec::new(),
            clock: Arc::new(SystemClock),
            params: ChatParams::default(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn default_system(mut self, template: PromptTemplate) -> Self {
        self.system = template;
        self
    }

    pub fn default_advisors(mut self, advisors: AdvisorPipeline) -> Self {
        self.advisors = Some(advisors);
        self
    }

    /// Names of the functions offered to the model on every request.
    pub fn default_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.functions.contains(&name) {
                self.functions.push(name);
            }
        }
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn params(mut self, params: ChatParams) -> Self {
        self.params = params;
        self
    }

    pub fn conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// The logger requests will report to.
    pub fn logger(&self) -> Arc<dyn ConversationLogger> {
        self.conversation_logger.clone()
    }

    /// Fails if a default function is unknown to the tool executor.
    pub fn build(self) -> Result<ChatClient, ChatClientError> {
        let spec = self.tool_executor.tool_spec();
        if let Some(missing) = self.functions.iter().find(|name| !spec.contains(name)) {
            return Err(ChatClientError::UnknownFunction(missing.clone()));
        }
        let tools = spec
            .subset(self.functions.iter().map(|s| s.as_str()))
            .all()
            .cloned()
            .collect::<Vec<_>>();

        debug!(
            model = self.gateway.model_name(),
            functions = ?self.functions,
            advisors = self.advisors.is_some(),
            "Built chat client"
        );

        Ok(ChatClient::from_inner(ClientInner {
            gateway: self.gateway,
            tool_executor: self.tool_executor,
            system: self.system,
            advisors: self.advisors,
            tools,
            clock: self.clock,
            params: self.params,
            conversation_logger: self.conversation_logger,
        }))
    }
}
