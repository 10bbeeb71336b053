//! Test doubles for the application ports.

use crate::ports::chat_memory::{ChatMemory, MemoryError};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{EventStream, GatewayError, LlmGateway, ModelRequest};
use crate::ports::tool_executor::ToolExecutorPort;
use crate::ports::vector_store::{VectorStore, VectorStoreError};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use support_domain::{
    ConversationId, Document, Message, SearchRequest, StopReason, StreamEvent, ToolCall,
    ToolDefinition, ToolError, ToolParameter, ToolResult, ToolSpec,
};

// ==================== Stream helpers ====================

pub(crate) fn text_turn(fragments: &[&str]) -> Vec<StreamEvent> {
    let mut events: Vec<StreamEvent> = fragments
        .iter()
        .map(|f| StreamEvent::Delta(f.to_string()))
        .collect();
    events.push(StreamEvent::Completed(StopReason::EndTurn));
    events
}

pub(crate) fn tool_call_turn(id: &str, name: &str, arguments: &str) -> Vec<StreamEvent> {
    let (head, tail) = arguments.split_at(arguments.len() / 2);
    vec![
        StreamEvent::ToolCallDelta {
            index: 0,
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            arguments_delta: None,
        },
        StreamEvent::ToolCallDelta {
            index: 0,
            id: None,
            name: None,
            arguments_delta: Some(head.to_string()),
        },
        StreamEvent::ToolCallDelta {
            index: 0,
            id: None,
            name: None,
            arguments_delta: Some(tail.to_string()),
        },
        StreamEvent::Completed(StopReason::ToolUse),
    ]
}

// ==================== Gateway ====================

/// Plays back one scripted turn per request and records every request.
pub(crate) struct ScriptedGateway {
    turns: Mutex<VecDeque<Vec<Result<StreamEvent, GatewayError>>>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(turns: Vec<Vec<StreamEvent>>) -> Self {
        Self::with_results(
            turns
                .into_iter()
                .map(|turn| turn.into_iter().map(Ok).collect())
                .collect(),
        )
    }

    pub(crate) fn with_results(turns: Vec<Vec<Result<StreamEvent, GatewayError>>>) -> Self {
        Self {
            turns: Mutex::new(VecDeque::from(turns)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn stream_chat(&self, request: ModelRequest) -> Result<EventStream, GatewayError> {
        self.requests.lock().unwrap().push(request);
        let turn = self
            .turns
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GatewayError::Other("No more turns".to_string()))?;
        Ok(Box::pin(futures::stream::iter(turn)))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

// ==================== Memory ====================

#[derive(Default)]
pub(crate) struct RecordingMemory {
    turns: Mutex<HashMap<ConversationId, Vec<Message>>>,
    sizes: Mutex<Vec<usize>>,
}

impl RecordingMemory {
    pub(crate) fn requested_sizes(&self) -> Vec<usize> {
        self.sizes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatMemory for RecordingMemory {
    async fn add(
        &self,
        conversation_id: &ConversationId,
        messages: Vec<Message>,
    ) -> Result<(), MemoryError> {
        self.turns
            .lock()
            .unwrap()
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
        self.sizes.lock().unwrap().push(last_n);
        let turns = self.turns.lock().unwrap();
        let all = turns.get(conversation_id).cloned().unwrap_or_default();
        let skip = all.len().saturating_sub(last_n);
        Ok(all.into_iter().skip(skip).collect())
    }

    async fn clear(&self, conversation_id: &ConversationId) -> Result<(), MemoryError> {
        self.turns.lock().unwrap().remove(conversation_id);
        Ok(())
    }
}

// ==================== Vector store ====================

/// Returns the same documents for every query.
pub(crate) struct StaticStore {
    documents: Vec<Document>,
    searches: Mutex<Vec<SearchRequest>>,
}

impl StaticStore {
    pub(crate) fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            searches: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn searches(&self) -> Vec<SearchRequest> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl VectorStore for StaticStore {
    async fn add(&self, _documents: Vec<Document>) -> Result<(), VectorStoreError> {
        Ok(())
    }

    async fn similarity_search(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<Document>, VectorStoreError> {
        self.searches.lock().unwrap().push(request.clone());
        Ok(self.documents.iter().take(request.top_k).cloned().collect())
    }
}

// ==================== Tools ====================

/// Offers `getBookingDetails`; every booking number except "999" is confirmed.
pub(crate) struct BookingExecutor {
    spec: ToolSpec,
    executed: Mutex<Vec<String>>,
}

impl Default for BookingExecutor {
    fn default() -> Self {
        Self {
            spec: ToolSpec::new().register(
                ToolDefinition::new("getBookingDetails", "Get booking details")
                    .with_parameter(ToolParameter::new("bookingNumber", "Booking number", true))
                    .with_parameter(ToolParameter::new("firstName", "First name", true))
                    .with_parameter(ToolParameter::new("lastName", "Last name", true)),
            ),
            executed: Mutex::new(Vec::new()),
        }
    }
}

impl BookingExecutor {
    pub(crate) fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolExecutorPort for BookingExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        let number = call.get_string("bookingNumber").unwrap_or_default().to_string();
        self.executed.lock().unwrap().push(number.clone());
        if number == "999" {
            return ToolResult::failure(&call.name, ToolError::not_found("booking 999"));
        }
        ToolResult::success(
            &call.name,
            format!(r#"{{"bookingNumber":"{}","bookingStatus":"CONFIRMED"}}"#, number),
        )
    }
}

#[derive(Default)]
pub(crate) struct EmptyExecutor {
    spec: ToolSpec,
}

#[async_trait]
impl ToolExecutorPort for EmptyExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        ToolResult::failure(&call.name, ToolError::not_found(&call.name))
    }
}

// ==================== Conversation logger ====================

#[derive(Default)]
pub(crate) struct CollectingLogger {
    events: Mutex<Vec<(&'static str, serde_json::Value)>>,
}

impl CollectingLogger {
    pub(crate) fn events(&self) -> Vec<(&'static str, serde_json::Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl ConversationLogger for CollectingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type, event.payload));
    }
}
