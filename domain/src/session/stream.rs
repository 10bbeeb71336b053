//! Streaming events for model backend communication.
//!
//! [`StreamEvent`] represents individual events of one streamed backend turn.
//! A turn is a sequence of `Delta` and `ToolCallDelta` events terminated by
//! exactly one `Completed` event.

use serde::{Deserialize, Serialize};

/// Reason the model stopped generating.
///
/// When a turn ends with `ToolUse`, the caller must execute the requested
/// functions and send the results back before the reply can continue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response; the model is done.
    EndTurn,
    /// The model wants to call functions.
    ToolUse,
    /// Hit the token limit; response may be truncated.
    MaxTokens,
    /// Provider-specific stop reason.
    Other(String),
}

impl StopReason {
    /// Map an OpenAI-style `finish_reason` string.
    pub fn from_finish_reason(reason: &str) -> Self {
        match reason {
            "stop" => StopReason::EndTurn,
            "tool_calls" | "function_call" => StopReason::ToolUse,
            "length" => StopReason::MaxTokens,
            other => StopReason::Other(other.to_string()),
        }
    }
}

/// An event in a streaming backend turn.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// A text chunk from the model.
    Delta(String),

    /// Incremental function-call data.
    ///
    /// Calls arrive in pieces: first `id` and `name`, then `arguments_delta`
    /// fragments that must be concatenated. `index` identifies which call a
    /// fragment belongs to when the model issues several calls in parallel.
    ToolCallDelta {
        index: usize,
        id: Option<String>,
        name: Option<String>,
        arguments_delta: Option<String>,
    },

    /// End of the turn.
    Completed(StopReason),
}

impl StreamEvent {
    /// Returns the text content if this is a Delta event.
    pub fn text(&self) -> Option<&str> {
        match self {
            StreamEvent::Delta(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if this event signals the end of the turn.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Completed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_text_returns_content() {
        let event = StreamEvent::Delta("hello".to_string());
        assert_eq!(event.text(), Some("hello"));
        assert!(!event.is_terminal());
    }

    #[test]
    fn completed_is_terminal() {
        let event = StreamEvent::Completed(StopReason::EndTurn);
        assert_eq!(event.text(), None);
        assert!(event.is_terminal());
    }

    #[test]
    fn tool_call_delta_is_not_terminal() {
        let event = StreamEvent::ToolCallDelta {
            index: 0,
            id: Some("call_1".to_string()),
            name: Some("getBookingDetails".to_string()),
            arguments_delta: None,
        };
        assert!(!event.is_terminal());
        assert_eq!(event.text(), None);
    }

    #[test]
    fn finish_reason_mapping() {
        assert_eq!(StopReason::from_finish_reason("stop"), StopReason::EndTurn);
        assert_eq!(
            StopReason::from_finish_reason("tool_calls"),
            StopReason::ToolUse
        );
        assert_eq!(
            StopReason::from_finish_reason("length"),
            StopReason::MaxTokens
        );
        assert_eq!(
            StopReason::from_finish_reason("content_filter"),
            StopReason::Other("content_filter".to_string())
        );
    }
}
