//! The fully assembled prompt of a single chat request

use crate::retrieval::entities::Document;
use crate::session::entities::{Message, PromptMessage};

const MEMORY_HEADER: &str = "Use the conversation memory from the MEMORY section to provide accurate answers.";
const CONTEXT_HEADER: &str = "Context information is below, surrounded by ---------------------";
const CONTEXT_FOOTER: &str = "Given the context and provided history information and not prior knowledge,\nreply to the user comment. If the answer is not in the context, inform\nthe user that you can't answer the question.";

/// Four segments, always emitted in this order: system instructions,
/// conversation history, retrieved context, user message.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// Rendered system instructions (date already substituted)
    pub system: String,
    /// Prior turns, oldest first
    pub history: Vec<Message>,
    /// Retrieved knowledge snippets, most relevant first
    pub context: Vec<Document>,
    /// The new user message
    pub user: String,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            history: Vec::new(),
            context: Vec::new(),
            user: user.into(),
        }
    }

    pub fn with_history(mut self, history: Vec<Message>) -> Self {
        self.history = history;
        self
    }

    pub fn with_context(mut self, context: Vec<Document>) -> Self {
        self.context = context;
        self
    }

    /// Render as backend messages.
    ///
    /// The system message carries the instructions followed by a MEMORY
    /// section when history exists. The user message carries the context
    /// section when snippets exist, followed by the user text.
    pub fn to_messages(&self) -> Vec<PromptMessage> {
        vec![
            PromptMessage::System(self.system_text()),
            PromptMessage::User(self.user_text()),
        ]
    }

    /// All segments flattened into one string, in prompt order.
    pub fn render_text(&self) -> String {
        format!("{}\n\n{}", self.system_text(), self.user_text())
    }

    fn system_text(&self) -> String {
        if self.history.is_empty() {
            return self.system.clone();
        }
        let memory = self
            .history
            .iter()
            .map(|m| format!("{}: {}", m.role, m.content))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{}\n\n{}\n\n---------------------\nMEMORY:\n{}\n---------------------",
            self.system, MEMORY_HEADER, memory
        )
    }

    fn user_text(&self) -> String {
        if self.context.is_empty() {
            return self.user.clone();
        }
        let snippets = self
            .context
            .iter()
            .map(|d| d.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{}\n\n---------------------\n{}\n---------------------\n\n{}\n\n{}",
            CONTEXT_HEADER, snippets, CONTEXT_FOOTER, self.user
        )
    }
}
