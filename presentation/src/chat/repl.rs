//! REPL (Read-Eval-Print Loop) for interactive chat

use super::printer::print_reply;
use crate::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::WaitingIndicator;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use support_application::CustomerSupportAssistant;
use support_domain::{ConversationId, DomainError};
use tracing::debug;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// Switch to a fresh conversation id
    New,
    /// Show the current conversation id
    Id,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// `None` when the line is a message rather than a command.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/new" => ReplCommand::New,
            "/id" => ReplCommand::Id,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }
}

static NEXT_CONVERSATION: AtomicU64 = AtomicU64::new(1);

/// A new conversation id: local time plus a per-process sequence number,
/// so ids minted within the same second still differ.
pub fn fresh_conversation_id() -> Result<ConversationId, DomainError> {
    let seq = NEXT_CONVERSATION.fetch_add(1, Ordering::Relaxed);
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    ConversationId::new(format!("chat-{}-{}", stamp, seq))
}

/// Interactive chat REPL
pub struct ChatRepl {
    assistant: Arc<CustomerSupportAssistant>,
    conversation_id: ConversationId,
    model: String,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(
        assistant: Arc<CustomerSupportAssistant>,
        conversation_id: ConversationId,
        model: impl Into<String>,
    ) -> Self {
        Self {
            assistant,
            conversation_id,
            model: model.into(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        print!(
            "{}",
            ConsoleFormatter::welcome(&self.conversation_id, &self.model)
        );

        loop {
            match rl.readline("You: ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", ConsoleFormatter::error(&format!("{:?}", err)));
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                print!("{}", ConsoleFormatter::help());
                false
            }
            ReplCommand::New => {
                match fresh_conversation_id() {
                    Ok(id) => {
                        self.conversation_id = id;
                        println!("Started conversation {}", self.conversation_id);
                    }
                    Err(e) => eprintln!("{}", ConsoleFormatter::error(&e.to_string())),
                }
                false
            }
            ReplCommand::Id => {
                println!("Conversation: {}", self.conversation_id);
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&self, message: &str) {
        debug!(conversation = %self.conversation_id, "Sending message");
        let stream = self.assistant.chat(&self.conversation_id, message);
        let indicator = if self.config.show_progress {
            WaitingIndicator::start("Thinking...")
        } else {
            WaitingIndicator::hidden()
        };

        let mut stdout = std::io::stdout();
        let label = ConsoleFormatter::assistant_label();
        if let Err(e) = print_reply(stream, &mut stdout, indicator, &label).await {
            println!();
            eprintln!("{}", ConsoleFormatter::error(&e.to_string()));
        }
        println!();
    }
}
