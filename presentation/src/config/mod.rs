//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show a spinner while waiting for the first fragment
    pub show_progress: bool,
    /// Path to history file; the platform data dir is used when unset
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_history_file(mut self, path: Option<String>) -> Self {
        self.history_file = path;
        self
    }

    /// History file location, if any can be determined.
    pub fn history_path(&self) -> Option<std::path::PathBuf> {
        match &self.history_file {
            Some(path) => Some(std::path::PathBuf::from(path)),
            None => dirs::data_dir().map(|p| p.join("airline-support").join("history.txt")),
        }
    }
}
