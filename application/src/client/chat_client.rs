//! Request execution and the function-call loop

use super::builder::ChatClientBuilder;
use super::error::ChatError;
use super::response_stream::ChatResponseStream;
use super::tool_calls::ToolCallAccumulator;
use crate::advisors::{AdvisorParams, AdvisorPipeline, DraftRequest, GroundedRequest};
use crate::config::ChatParams;
use crate::ports::clock::Clock;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{LlmGateway, ModelRequest};
use crate::ports::tool_executor::ToolExecutorPort;
use async_stream::try_stream;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Instant;
use support_domain::{
    PromptMessage, PromptTemplate, RetrievedContext, StreamEvent, TemplateParams, ToolCall,
    ToolDefinition, ToolError, ToolResult,
};
use tracing::{debug, warn};

pub(crate) struct ClientInner {
    pub(crate) gateway: Arc<dyn LlmGateway>,
    pub(crate) tool_executor: Arc<dyn ToolExecutorPort>,
    pub(crate) system: PromptTemplate,
    pub(crate) advisors: Option<AdvisorPipeline>,
    pub(crate) tools: Vec<ToolDefinition>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) params: ChatParams,
    pub(crate) conversation_logger: Arc<dyn ConversationLogger>,
}

/// Immutable, shareable chat client. Cloning is cheap.
#[derive(Clone)]
pub struct ChatClient {
    inner: Arc<ClientInner>,
}

impl ChatClient {
    pub fn builder(
        gateway: Arc<dyn LlmGateway>,
        tool_executor: Arc<dyn ToolExecutorPort>,
    ) -> ChatClientBuilder {
        ChatClientBuilder::new(gateway, tool_executor)
    }

    pub(crate) fn from_inner(inner: ClientInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Start describing a request.
    pub fn prompt(&self) -> ChatRequestSpec {
        ChatRequestSpec {
            client: self.clone(),
            system_params: TemplateParams::new(),
            user: String::new(),
            advisor_params: AdvisorParams::new(),
        }
    }

    pub fn clock(&self) -> &dyn Clock {
        self.inner.clock.as_ref()
    }

    /// Names of the functions offered to the model.
    pub fn functions(&self) -> Vec<&str> {
        self.inner.tools.iter().map(|t| t.name.as_str()).collect()
    }
}

/// One request: system parameters, user text and advisor parameters.
pub struct ChatRequestSpec {
    client: ChatClient,
    system_params: TemplateParams,
    user: String,
    advisor_params: AdvisorParams,
}

impl ChatRequestSpec {
    pub fn system_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.system_params.insert(key, value);
        self
    }

    pub fn system_params(mut self, params: TemplateParams) -> Self {
        self.system_params = params;
        self
    }

    pub fn user(mut self, text: impl Into<String>) -> Self {
        self.user = text.into();
        self
    }

    pub fn advisor_params(mut self, params: AdvisorParams) -> Self {
        self.advisor_params = params;
        self
    }

    /// Reply fragments, produced on demand.
    pub fn stream(self) -> ChatResponseStream {
        let ChatRequestSpec {
            client,
            system_params,
            user,
            advisor_params,
        } = self;
        ChatResponseStream::new(run(client.inner, system_params, user, advisor_params))
    }
}

fn run(
    inner: Arc<ClientInner>,
    system_params: TemplateParams,
    user: String,
    advisor_params: AdvisorParams,
) -> impl futures::Stream<Item = Result<String, ChatError>> + Send + 'static {
    try_stream! {
        let system = inner.system.render(&system_params).map_err(ChatError::from)?;
        let draft = DraftRequest {
            system,
            user,
            params: advisor_params,
        };
        let request = match &inner.advisors {
            Some(advisors) => advisors.advise(draft).await?,
            None => unadvised(draft),
        };

        let mut messages = request.prompt().to_messages();
        let mut reply = String::new();
        let mut rounds = 0usize;

        loop {
            let model_request = ModelRequest::new(messages.clone()).with_tools(inner.tools.clone());
            let mut events = inner
                .gateway
                .stream_chat(model_request)
                .await
                .map_err(ChatError::from)?;

            let mut turn_text = String::new();
            let mut pending = ToolCallAccumulator::default();
            while let Some(event) = events.next().await {
                match event.map_err(ChatError::from)? {
                    StreamEvent::Delta(text) => {
                        turn_text.push_str(&text);
                        yield text;
                    }
                    StreamEvent::ToolCallDelta {
                        index,
                        id,
                        name,
                        arguments_delta,
                    } => pending.push(index, id, name, arguments_delta),
                    StreamEvent::Completed(reason) => {
                        debug!(?reason, round = rounds, "Backend turn completed");
                        break;
                    }
                }
            }
            reply.push_str(&turn_text);

            if pending.is_empty() {
                break;
            }
            let calls = pending.finish().map_err(ChatError::from)?;

            rounds += 1;
            if rounds > inner.params.max_tool_rounds {
                warn!(
                    "Function call loop exceeded max_tool_rounds ({})",
                    inner.params.max_tool_rounds
                );
                break;
            }

            debug!(
                "Function call round {}/{}: executing {} calls",
                rounds,
                inner.params.max_tool_rounds,
                calls.len()
            );
            let results: Vec<ToolResult> =
                futures::future::join_all(calls.iter().map(|call| inner.execute_tool(call))).await;

            messages.push(PromptMessage::Assistant {
                text: turn_text,
                tool_calls: calls.clone(),
            });
            for (call, result) in calls.iter().zip(results) {
                messages.push(PromptMessage::Tool {
                    call_id: call.id.clone(),
                    name: call.name.clone(),
                    content: result.to_model_content(),
                });
            }
        }

        if let Some(advisors) = &inner.advisors {
            advisors.complete(&request, &reply).await?;
        }
    }
}

fn unadvised(draft: DraftRequest) -> GroundedRequest {
    GroundedRequest {
        system: draft.system,
        user: draft.user,
        conversation_id: draft.params.conversation_id.unwrap_or_default(),
        retrieve_size: draft.params.retrieve_size.unwrap_or(0),
        history: Vec::new(),
        context: RetrievedContext::default(),
    }
}

impl ClientInner {
    async fn execute_tool(&self, call: &ToolCall) -> ToolResult {
        if !self.tools.iter().any(|t| t.name == call.name) {
            warn!(tool = %call.name, "Model requested a function that is not offered");
            return ToolResult::failure(
                &call.name,
                ToolError::not_found(format!("function {}", call.name)),
            );
        }

        let started = Instant::now();
        let mut result = self.tool_executor.execute(call).await;
        if result.duration_ms.is_none() {
            result = result.with_duration(started.elapsed().as_millis() as u64);
        }

        debug!(
            tool = %call.name,
            success = result.is_success(),
            duration_ms = result.duration_ms.unwrap_or(0),
            "Function call finished"
        );
        self.conversation_logger.log(ConversationEvent::new(
            "tool_call",
            serde_json::json!({
                "call_id": call.id,
                "tool": call.name,
                "arguments": call.arguments,
                "success": result.is_success(),
                "output": result.to_model_content(),
                "duration_ms": result.duration_ms,
            }),
        ));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisors::{LoggingAdvisor, MemoryAdvisor, QuestionAnswerAdvisor};
    use crate::ports::chat_memory::ChatMemory;
    use crate::ports::llm_gateway::GatewayError;
    use crate::test_support::{
        BookingExecutor, CollectingLogger, RecordingMemory, ScriptedGateway, StaticStore,
        text_turn, tool_call_turn,
    };
    use support_domain::{ConversationId, SearchRequest, StopReason};

    fn client(gateway: Arc<ScriptedGateway>, memory: Arc<RecordingMemory>) -> ChatClient {
        ChatClient::builder(gateway, Arc::new(BookingExecutor::default()))
            .default_system(PromptTemplate::new("rules for {current_date}"))
            .default_advisors(AdvisorPipeline::new(
                MemoryAdvisor::new(memory),
                QuestionAnswerAdvisor::new(
                    Arc::new(StaticStore::new(vec![])),
                    SearchRequest::defaults(),
                ),
                LoggingAdvisor::default(),
            ))
            .default_functions(["getBookingDetails"])
            .params(ChatParams::default().with_max_tool_rounds(2))
            .build()
            .unwrap()
    }

    fn request(client: &ChatClient, user: &str) -> ChatResponseStream {
        client
            .prompt()
            .system_param("current_date", "2024-05-01")
            .user(user)
            .advisor_params(
                AdvisorParams::new()
                    .conversation_id(ConversationId::new("c1").unwrap())
                    .retrieve_size(100),
            )
            .stream()
    }

    fn tool_messages(request: &ModelRequest) -> Vec<String> {
        request
            .messages
            .iter()
            .filter(|m| matches!(m, PromptMessage::Tool { .. }))
            .map(|m| m.text().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_parallel_calls_all_answered() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            vec![
                StreamEvent::ToolCallDelta {
                    index: 0,
                    id: Some("a".into()),
                    name: Some("getBookingDetails".into()),
                    arguments_delta: Some(r#"{"bookingNumber":"101"}"#.into()),
                },
                StreamEvent::ToolCallDelta {
                    index: 1,
                    id: Some("b".into()),
                    name: Some("getBookingDetails".into()),
                    arguments_delta: Some(r#"{"bookingNumber":"102"}"#.into()),
                },
                StreamEvent::Completed(StopReason::ToolUse),
            ],
            text_turn(&["Both confirmed."]),
        ]));
        let memory = Arc::new(RecordingMemory::default());
        let reply = request(&client(gateway.clone(), memory), "two bookings")
            .collect_text()
            .await
            .unwrap();

        assert_eq!(reply, "Both confirmed.");
        let requests = gateway.requests();
        let answers = tool_messages(&requests[1]);
        assert_eq!(answers.len(), 2);
        assert!(answers[0].contains("101"));
        assert!(answers[1].contains("102"));
        match &requests[1].messages[2] {
            PromptMessage::Assistant { tool_calls, .. } => assert_eq!(tool_calls.len(), 2),
            other => panic!("Expected assistant tool calls, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_lookup_is_returned_to_model() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            tool_call_turn("call_1", "getBookingDetails", r#"{"bookingNumber":"999"}"#),
            text_turn(&["I could not find that booking."]),
        ]));
        let memory = Arc::new(RecordingMemory::default());
        let reply = request(&client(gateway.clone(), memory), "booking 999")
            .collect_text()
            .await
            .unwrap();

        assert_eq!(reply, "I could not find that booking.");
        let answers = tool_messages(&gateway.requests()[1]);
        assert!(answers[0].starts_with("Error: [NOT_FOUND]"));
    }

    #[tokio::test]
    async fn test_unoffered_function_gets_not_found() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            tool_call_turn("call_1", "cancelBooking", r#"{"bookingNumber":"101"}"#),
            text_turn(&["Sorry."]),
        ]));
        let memory = Arc::new(RecordingMemory::default());
        request(&client(gateway.clone(), memory), "cancel 101")
            .collect_text()
            .await
            .unwrap();

        let answers = tool_messages(&gateway.requests()[1]);
        assert_eq!(answers.len(), 1);
        assert!(answers[0].contains("NOT_FOUND"));
        assert!(answers[0].contains("cancelBooking"));
    }

    #[tokio::test]
    async fn test_malformed_arguments_end_stream_with_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![tool_call_turn(
            "call_1",
            "getBookingDetails",
            "[\"551\"]",
        )]));
        let memory = Arc::new(RecordingMemory::default());
        let result = request(&client(gateway, memory.clone()), "status?")
            .collect_text()
            .await;

        assert!(matches!(result, Err(ChatError::MalformedToolCall(_))));
        let stored = memory
            .get(&ConversationId::new("c1").unwrap(), 100)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1, "only the user turn is stored");
    }

    #[tokio::test]
    async fn test_round_limit_ends_stream_normally() {
        let call = || tool_call_turn("call", "getBookingDetails", r#"{"bookingNumber":"101"}"#);
        let gateway = Arc::new(ScriptedGateway::new(vec![call(), call(), call(), call()]));
        let memory = Arc::new(RecordingMemory::default());

        let reply = request(&client(gateway.clone(), memory.clone()), "loop")
            .collect_text()
            .await
            .unwrap();

        assert_eq!(reply, "");
        // two answered rounds, the third request's calls are dropped
        assert_eq!(gateway.requests().len(), 3);

        let stored = memory
            .get(&ConversationId::new("c1").unwrap(), 100)
            .await
            .unwrap();
        assert_eq!(stored, vec![support_domain::Message::user("loop")]);
    }

    #[tokio::test]
    async fn test_gateway_error_is_terminal_and_nothing_is_stored() {
        let gateway = Arc::new(ScriptedGateway::with_results(vec![vec![
            Ok(StreamEvent::Delta("Partial ".into())),
            Err(GatewayError::ConnectionError("reset".into())),
        ]]));
        let memory = Arc::new(RecordingMemory::default());
        let mut stream = request(&client(gateway, memory.clone()), "hi");

        assert_eq!(stream.next().await.unwrap().unwrap(), "Partial ");
        assert!(matches!(
            stream.next().await,
            Some(Err(ChatError::Gateway(GatewayError::ConnectionError(_))))
        ));
        assert!(stream.next().await.is_none());

        let stored = memory
            .get(&ConversationId::new("c1").unwrap(), 100)
            .await
            .unwrap();
        assert_eq!(stored, vec![support_domain::Message::user("hi")]);
    }

    #[tokio::test]
    async fn test_missing_system_param_is_an_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![text_turn(&["unused"])]));
        let memory = Arc::new(RecordingMemory::default());
        let result = client(gateway.clone(), memory)
            .prompt()
            .user("hi")
            .stream()
            .collect_text()
            .await;

        assert!(matches!(result, Err(ChatError::Template(_))));
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_without_advisors() {
        let gateway = Arc::new(ScriptedGateway::new(vec![text_turn(&["plain"])]));
        let client = ChatClient::builder(gateway.clone(), Arc::new(BookingExecutor::default()))
            .build()
            .unwrap();

        let reply = client.prompt().user("hi").stream().collect_text().await.unwrap();
        assert_eq!(reply, "plain");
        let requests = gateway.requests();
        assert!(requests[0].tools.is_empty());
        assert_eq!(requests[0].messages[1].text(), "hi");
    }

    #[tokio::test]
    async fn test_tool_calls_are_logged() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            tool_call_turn("call_1", "getBookingDetails", r#"{"bookingNumber":"101"}"#),
            text_turn(&["ok"]),
        ]));
        let logger = Arc::new(CollectingLogger::default());
        let client = ChatClient::builder(gateway, Arc::new(BookingExecutor::default()))
            .default_functions(["getBookingDetails"])
            .conversation_logger(logger.clone())
            .build()
            .unwrap();

        client.prompt().user("101").stream().collect_text().await.unwrap();

        let events = logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, "tool_call");
        assert_eq!(events[0].1["call_id"], "call_1");
        assert_eq!(events[0].1["success"], true);
    }

    #[test]
    fn test_unknown_default_function_fails_build() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let result = ChatClient::builder(gateway, Arc::new(BookingExecutor::default()))
            .default_functions(["changeBooking"])
            .build();
        assert!(matches!(
            result,
            Err(super::super::ChatClientError::UnknownFunction(_))
        ));
    }
}
