//! Wire types for the chat-completions and embeddings endpoints
//!
//! Converts domain prompt messages to request bodies and streamed chunks to
//! domain [`StreamEvent`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use support_domain::{PromptMessage, StopReason, StreamEvent, ToolCall};

// ─── Domain → OpenAI ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Value>,
    pub stream: bool,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct WireMessage {
    pub role: &'static str,
    /// `null` for an assistant turn that only calls functions
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<WireToolCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: WireFunction,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct WireFunction {
    pub name: String,
    pub arguments: String,
}

impl From<&ToolCall> for WireToolCall {
    fn from(call: &ToolCall) -> Self {
        Self {
            id: call.id.clone(),
            kind: "function",
            function: WireFunction {
                name: call.name.clone(),
                arguments: call.arguments_json(),
            },
        }
    }
}

impl From<&PromptMessage> for WireMessage {
    fn from(message: &PromptMessage) -> Self {
        let role = message.role_name();
        match message {
            PromptMessage::System(text) | PromptMessage::User(text) => Self {
                role,
                content: Some(text.clone()),
                tool_calls: Vec::new(),
                tool_call_id: None,
                name: None,
            },
            PromptMessage::Assistant { text, tool_calls } => Self {
                role,
                content: if text.is_empty() && !tool_calls.is_empty() {
                    None
                } else {
                    Some(text.clone())
                },
                tool_calls: tool_calls.iter().map(WireToolCall::from).collect(),
                tool_call_id: None,
                name: None,
            },
            PromptMessage::Tool {
                call_id,
                name,
                content,
            } => Self {
                role,
                content: Some(content.clone()),
                tool_calls: Vec::new(),
                tool_call_id: Some(call_id.clone()),
                name: Some(name.clone()),
            },
        }
    }
}

// ─── OpenAI → Domain ─────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChunkDelta {
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Vec<ChunkToolCall>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkToolCall {
    #[serde(default)]
    pub index: usize,
    pub id: Option<String>,
    pub function: Option<ChunkFunction>,
}

#[derive(Debug, Deserialize)]
pub struct ChunkFunction {
    pub name: Option<String>,
    pub arguments: Option<String>,
}

impl ChatCompletionChunk {
    /// Events carried by this chunk; `Completed` comes last when present.
    pub fn into_events(self) -> Vec<StreamEvent> {
        let mut events = Vec::new();
        // n = 1 is always requested, so only the first choice matters
        let Some(choice) = self.choices.into_iter().next() else {
            return events;
        };

        if let Some(text) = choice.delta.content {
            if !text.is_empty() {
                events.push(StreamEvent::Delta(text));
            }
        }

        for call in choice.delta.tool_calls {
            let (name, arguments_delta) = match call.function {
                Some(f) => (f.name, f.arguments),
                None => (None, None),
            };
            events.push(StreamEvent::ToolCallDelta {
                index: call.index,
                id: call.id,
                name,
                arguments_delta,
            });
        }

        if let Some(reason) = choice.finish_reason {
            events.push(StreamEvent::Completed(StopReason::from_finish_reason(
                &reason,
            )));
        }

        events
    }
}

/// `{"error": {"message": ...}}` body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// Best-effort message from an error response body.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

// ─── Embeddings ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct EmbeddingRequest<'a> {
    pub model: &'a str,
    pub input: &'a [String],
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingData {
    pub index: usize,
    pub embedding: Vec<f32>,
}

impl EmbeddingResponse {
    /// Vectors in input order.
    pub fn into_vectors(mut self) -> Vec<Vec<f32>> {
        self.data.sort_by_key(|d| d.index);
        self.data.into_iter().map(|d| d.embedding).collect()
    }
}
