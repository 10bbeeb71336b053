//! Streaming chat-completions gateway
//!
//! Implements [`LlmGateway`]. The backend is stateless, so every request
//! carries the full prompt plus any function-call exchange of the turn.

use super::sse::{SseData, SseDecoder};
use super::types::{ChatCompletionChunk, ChatCompletionRequest, WireMessage};
use super::{OpenAiSettings, failure};
use crate::tools::JsonSchemaToolConverter;
use async_stream::try_stream;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::StatusCode;
use support_application::{EventStream, GatewayError, LlmGateway, ModelRequest};
use support_domain::{StopReason, StreamEvent};
use tracing::debug;

pub struct OpenAiGateway {
    client: reqwest::Client,
    settings: OpenAiSettings,
}

impl OpenAiGateway {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn request_body<'a>(&'a self, request: &ModelRequest) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.settings.chat_model,
            messages: request.messages.iter().map(WireMessage::from).collect(),
            tools: JsonSchemaToolConverter::tools_schema(&request.tools),
            stream: true,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }
}

fn status_error(status: StatusCode, message: String) -> GatewayError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GatewayError::RequestFailed(format!("authentication rejected ({}): {}", status, message))
        }
        _ => GatewayError::RequestFailed(format!("{}: {}", status, message)),
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn stream_chat(&self, request: ModelRequest) -> Result<EventStream, GatewayError> {
        let body = self.request_body(&request);

        debug!(
            model = %self.settings.chat_model,
            messages = body.messages.len(),
            tools = body.tools.len(),
            "Calling chat completions"
        );

        let response = self
            .client
            .post(self.settings.endpoint("chat/completions"))
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = failure(response).await;
            return Err(status_error(status, message));
        }

        let mut bytes = response.bytes_stream();

        let stream = try_stream! {
            let mut decoder = SseDecoder::new();
            let mut completed = false;
            let mut done = false;

            'read: while let Some(chunk) = bytes.next().await {
                let chunk = chunk.map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
                for data in decoder.push(&chunk) {
                    match data {
                        SseData::Done => {
                            done = true;
                            break 'read;
                        }
                        SseData::Json(json) => {
                            let parsed: ChatCompletionChunk = serde_json::from_str(&json)
                                .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
                            for event in parsed.into_events() {
                                completed |= event.is_terminal();
                                yield event;
                            }
                        }
                    }
                }
            }

            if !done {
                done = matches!(decoder.finish(), Some(SseData::Done));
            }

            if !completed {
                if done {
                    yield StreamEvent::Completed(StopReason::EndTurn);
                } else {
                    Err(GatewayError::InvalidResponse(
                        "stream ended before the turn completed".to_string(),
                    ))?;
                }
            }
        };

        Ok(Box::pin(stream))
    }

    fn model_name(&self) -> &str {
        &self.settings.chat_model
    }
}
