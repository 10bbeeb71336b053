//! Session domain entities

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "SYSTEM",
            Role::User => "USER",
            Role::Assistant => "ASSISTANT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single turn of a conversation, as kept by the memory store (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A message exchanged with the model backend.
///
/// Unlike [`Message`], this also carries the function-calling exchange of a
/// single request (assistant tool calls and their results). Those are never
/// written to conversation memory.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptMessage {
    System(String),
    User(String),
    Assistant {
        text: String,
        tool_calls: Vec<ToolCall>,
    },
    Tool {
        call_id: String,
        name: String,
        content: String,
    },
}

impl PromptMessage {
    /// Text content of the message, if any.
    pub fn text(&self) -> &str {
        match self {
            PromptMessage::System(text) | PromptMessage::User(text) => text,
            PromptMessage::Assistant { text, .. } => text,
            PromptMessage::Tool { content, .. } => content,
        }
    }

    /// Wire role name used by chat-completion style backends.
    pub fn role_name(&self) -> &'static str {
        match self {
            PromptMessage::System(_) => "system",
            PromptMessage::User(_) => "user",
            PromptMessage::Assistant { .. } => "assistant",
            PromptMessage::Tool { .. } => "tool",
        }
    }
}
