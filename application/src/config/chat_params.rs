//! Chat parameters: request loop control.

use serde::{Deserialize, Serialize};

/// Loop control for [`ChatClient`](crate::client::ChatClient) requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatParams {
    /// Maximum function-call rounds answered within one request.
    pub max_tool_rounds: usize,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self { max_tool_rounds: 5 }
    }
}

impl ChatParams {
    pub fn with_max_tool_rounds(mut self, max: usize) -> Self {
        self.max_tool_rounds = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(ChatParams::default().max_tool_rounds, 5);
    }

    #[test]
    fn test_builder() {
        let params = ChatParams::default().with_max_tool_rounds(2);
        assert_eq!(params.max_tool_rounds, 2);
    }
}
