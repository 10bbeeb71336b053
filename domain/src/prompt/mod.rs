//! Prompt domain
//!
//! Templates, the fixed support instructions, and the assembled request prompt.

pub mod assembled;
pub mod support;
mod template;

pub use assembled::Prompt;
pub use support::SupportPrompt;
pub use template::{PromptTemplate, TemplateError, TemplateParams};
