//! Interactive chat module
//!
//! Provides a readline-based chat interface and the streaming reply printer
//! shared with single-shot mode.

mod printer;
mod repl;

pub use printer::print_reply;
pub use repl::{ChatRepl, ReplCommand, fresh_conversation_id};
