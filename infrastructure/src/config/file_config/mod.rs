//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section has defaults, so an empty file is a valid configuration.

mod chat;
mod knowledge;
mod logging;
mod model;
mod repl;

pub use chat::FileChatConfig;
pub use knowledge::FileKnowledgeConfig;
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;
use support_domain::config::{ConfigIssue, ConfigIssueCode};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model backend settings
    pub model: FileModelConfig,
    /// Knowledge base ingestion
    pub knowledge: FileKnowledgeConfig,
    /// Chat loop settings
    pub chat: FileChatConfig,
    /// Diagnostic and transcript logs
    pub logging: FileLoggingConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.model.resolve_api_key().is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingApiKey,
                format!(
                    "model.api_key is not set and ${} is empty",
                    self.model.api_key_env
                ),
            ));
        }

        if !(0.0..=2.0).contains(&self.model.temperature) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::TemperatureOutOfRange,
                format!(
                    "model.temperature must be between 0.0 and 2.0, got {}",
                    self.model.temperature
                ),
            ));
        }

        if self.knowledge.chunk_size == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidChunkSize,
                "knowledge.chunk_size must be greater than 0",
            ));
        } else if self.knowledge.chunk_overlap >= self.knowledge.chunk_size {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OverlapTooLarge,
                format!(
                    "knowledge.chunk_overlap ({}) must be smaller than knowledge.chunk_size ({})",
                    self.knowledge.chunk_overlap, self.knowledge.chunk_size
                ),
            ));
        }

        if !Path::new(&self.knowledge.path).exists() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::KnowledgeFileMissing,
                format!(
                    "knowledge.path '{}' does not exist; answers will not use the terms of service",
                    self.knowledge.path
                ),
            ));
        }

        if self.chat.max_tool_rounds == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::NoToolRounds,
                "chat.max_tool_rounds is 0; booking lookups will never be answered",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_domain::config::{Severity, has_errors};

    fn keyed() -> FileConfig {
        let mut config = FileConfig::default();
        config.model.api_key = Some("sk-test".to_string());
        config.knowledge.path = env!("CARGO_MANIFEST_DIR").to_string() + "/Cargo.toml";
        config
    }

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[model]
base_url = "http://localhost:8080"
chat_model = "gpt-4o-mini"
temperature = 0.2
max_tokens = 1024

[knowledge]
path = "docs/tos.txt"
chunk_size = 500
chunk_overlap = 50

[chat]
max_tool_rounds = 3

[logging]
directory = "logs"
conversation_log = "logs/conversations.jsonl"

[repl]
show_progress = false
history_file = "~/.local/share/airline-support/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.base_url, "http://localhost:8080");
        assert_eq!(config.model.chat_model, "gpt-4o-mini");
        assert_eq!(config.model.max_tokens, Some(1024));
        assert_eq!(config.knowledge.chunk_size, 500);
        assert_eq!(config.chat.to_chat_params().max_tool_rounds, 3);
        assert_eq!(config.logging.directory.as_deref(), Some("logs"));
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[model]
chat_model = "gpt-4o-mini"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model.chat_model, "gpt-4o-mini");
        // Defaults should apply
        assert_eq!(config.model.embedding_model, "text-embedding-3-small");
        assert_eq!(config.knowledge.path, "knowledge/terms-of-service.txt");
        assert_eq!(config.chat.max_tool_rounds, 5);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(keyed().validate().is_empty());
    }

    #[test]
    fn test_validate_chunking() {
        let mut config = keyed();
        config.knowledge.chunk_overlap = config.knowledge.chunk_size;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::OverlapTooLarge);
        assert!(has_errors(&issues));

        config.knowledge.chunk_size = 0;
        assert_eq!(config.validate()[0].code, ConfigIssueCode::InvalidChunkSize);
    }

    #[test]
    fn test_validate_warnings() {
        let mut config = keyed();
        config.chat.max_tool_rounds = 0;
        config.knowledge.path = "does/not/exist.txt".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
    }

    #[test]
    fn test_validate_temperature() {
        let mut config = keyed();
        config.model.temperature = 3.5;
        let issues = config.validate();
        assert_eq!(issues[0].code, ConfigIssueCode::TemperatureOutOfRange);
    }

    #[test]
    fn test_validate_missing_key() {
        let mut config = keyed();
        config.model.api_key = None;
        config.model.api_key_env = "SUPPORT_TEST_UNSET_KEY_VARIABLE".to_string();
        let issues = config.validate();
        assert_eq!(issues[0].code, ConfigIssueCode::MissingApiKey);
    }
}
