//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily rotated diagnostic logs; stderr only when unset
    pub directory: Option<String>,
    /// JSONL conversation transcript path; disabled when unset
    pub conversation_log: Option<String>,
}
