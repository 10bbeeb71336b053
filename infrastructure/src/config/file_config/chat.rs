//! Chat loop configuration from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};
use support_application::ChatParams;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Maximum function-call rounds per message
    pub max_tool_rounds: usize,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: ChatParams::default().max_tool_rounds,
        }
    }
}

impl FileChatConfig {
    pub fn to_chat_params(&self) -> ChatParams {
        ChatParams::default().with_max_tool_rounds(self.max_tool_rounds)
    }
}
