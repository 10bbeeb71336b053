//! Presentation layer for airline-support
//!
//! This crate contains CLI definitions, console formatting, the waiting
//! spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand, fresh_conversation_id, print_reply};
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::WaitingIndicator;
