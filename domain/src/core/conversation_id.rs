//! Conversation identifier value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Caller-supplied key for a conversation (Value Object)
///
/// The same id must be used for every message of a chat session: the
/// memory store keys the conversation history by it. Surrounding whitespace
/// is trimmed; an empty id is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConversationId(String);

impl ConversationId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidConversationId(
                "conversation id must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for ConversationId {
    /// The conversation used when a request names none.
    fn default() -> Self {
        Self("default".to_string())
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ConversationId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ConversationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConversationId> for String {
    fn from(id: ConversationId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id() {
        let id = ConversationId::new("abc123").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn test_id_is_trimmed() {
        let id: ConversationId = "  abc123 \n".parse().unwrap();
        assert_eq!(id, ConversationId::new("abc123").unwrap());
    }

    #[test]
    fn test_default_id() {
        assert_eq!(ConversationId::default().as_str(), "default");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(ConversationId::new("").is_err());
        assert!(ConversationId::new("   ").is_err());
    }

    #[test]
    fn test_serde_round_trip_rejects_blank() {
        let id: ConversationId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert!(serde_json::from_str::<ConversationId>("\"\"").is_err());
    }
}
