//! Presentation layer for queue-setup
//!
//! This crate contains CLI definitions, the interactive terminal prompt
//! session and descriptor formatters.

pub mod cli;
pub mod output;
pub mod prompt;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, Phase};
pub use output::console::ConsoleFormatter;
pub use prompt::ConsolePromptSession;
