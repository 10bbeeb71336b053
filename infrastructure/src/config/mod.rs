//! Configuration file loading for airline-support
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SUPPORT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./support.toml` or `./.support.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/airline-support/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileChatConfig, FileConfig, FileKnowledgeConfig, FileLoggingConfig, FileModelConfig,
    FileReplConfig,
};
pub use loader::ConfigLoader;
