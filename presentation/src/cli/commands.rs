//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for airline-support
#[derive(Parser, Debug)]
#[command(name = "airline-support")]
#[command(author, version, about = "Epic Airlines customer-support chat assistant")]
#[command(long_about = r#"
Chat with the Epic Airlines support assistant. Answers draw on the terms of
service and can look up a booking by number and customer name.

Without MESSAGE an interactive chat starts. With MESSAGE a single reply is
streamed and the program exits.

Configuration files are loaded from (in priority order):
1. SUPPORT_* environment variables (e.g. SUPPORT_MODEL__CHAT_MODEL)
2. --config <path>     Explicit config file
3. ./support.toml      Project-level config
4. ~/.config/airline-support/config.toml   Global config

Example:
  airline-support
  airline-support "Can I change my booking 101 for John Doe?"
  airline-support -c trip-42 "What is the baggage allowance?"
"#)]
pub struct Cli {
    /// Send a single message instead of starting the interactive chat
    pub message: Option<String>,

    /// Conversation id; turns with the same id share memory
    #[arg(short = 'c', long, value_name = "ID")]
    pub conversation: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators and non-error logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log filter directive implied by `-q` and `-v`.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
