//! Terminal prompt adapters

mod console;

pub use console::ConsolePromptSession;
