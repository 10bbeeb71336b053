//! Configuration validation issues.
//!
//! The infrastructure config loader checks the merged settings and reports
//! problems as [`ConfigIssue`]s. Errors stop startup; warnings are logged.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// No API key is configured and the key environment variable is unset.
    MissingApiKey,
    /// `knowledge.chunk_size` is zero.
    InvalidChunkSize,
    /// `knowledge.chunk_overlap` is not smaller than `knowledge.chunk_size`.
    OverlapTooLarge,
    /// `chat.max_tool_rounds` is zero; function calls can never be answered.
    NoToolRounds,
    /// `model.temperature` is outside `0.0..=2.0`.
    TemperatureOutOfRange,
    /// The knowledge file does not exist; retrieval will return nothing.
    KnowledgeFileMissing,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Returns true if any issue is an error.
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_errors_returns_true_for_errors() {
        let issues = vec![
            ConfigIssue::warning(ConfigIssueCode::KnowledgeFileMissing, "missing"),
            ConfigIssue::error(ConfigIssueCode::InvalidChunkSize, "zero"),
        ];
        assert!(has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        let issues = vec![ConfigIssue::warning(
            ConfigIssueCode::MissingApiKey,
            "no key",
        )];
        assert!(!has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!has_errors(&[]));
    }
}
