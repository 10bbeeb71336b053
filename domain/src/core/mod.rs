//! Core domain concepts shared across all subdomains.
//!
//! - [`conversation_id::ConversationId`]: the caller-supplied conversation key
//! - [`error::DomainError`]: domain-level errors

pub mod conversation_id;
pub mod error;
