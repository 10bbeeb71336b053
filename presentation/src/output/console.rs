//! Console formatting for the chat front-end

use colored::Colorize;
use support_domain::{ConfigIssue, ConversationId, Severity};

/// Formats banners, prompts and diagnostics for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome(conversation_id: &ConversationId, model: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│       Epic Airlines - Customer Support      │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
        output.push_str(&format!(
            "{} {}\n",
            "Conversation:".cyan().bold(),
            conversation_id
        ));
        output.push('\n');
        output.push_str(&Self::help());
        output
    }

    pub fn help() -> String {
        [
            "Commands:",
            "  /help, /h, /?     - Show this help",
            "  /new              - Start a new conversation",
            "  /id               - Show the conversation id",
            "  /quit, /exit, /q  - Exit chat",
            "",
        ]
        .join("\n")
            + "\n"
    }

    /// Label printed before a streamed reply.
    pub fn assistant_label() -> String {
        format!("{} ", "Assistant:".green().bold())
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn config_issue(issue: &ConfigIssue) -> String {
        let label = match issue.severity {
            Severity::Error => "error:".red().bold(),
            Severity::Warning => "warning:".yellow().bold(),
        };
        format!("{} {}", label, issue.message)
    }
}
