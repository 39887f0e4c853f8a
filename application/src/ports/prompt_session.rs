//! Prompt session port for operator interaction.
//!
//! Every question the engine asks goes through [`PromptSession`]. The
//! session owns rendering, input parsing and re-prompting: when a method
//! returns `Ok`, the answer is already well-typed and within range.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`PromptSession`] - defined here in application layer
//! - **Adapter**: `ConsolePromptSession` - implemented in presentation layer
//!
//! # Built-in Implementations
//!
//! - [`AcceptDefaults`] - answers every question with its default, for
//!   unattended runs

use thiserror::Error;
use tracing::debug;

/// Error type for prompt operations.
///
/// These are failures of the exchange itself, never operator answers.
/// Any of them aborts the running phase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// Operator aborted (e.g. end of input).
    #[error("Prompt cancelled")]
    Cancelled,

    /// Terminal read or write failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// The session produced an answer outside the offered options.
    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    /// Non-interactive session asked a question that has no default.
    #[error("No default available for '{0}'")]
    NoDefault(String),
}

impl PromptError {
    /// Check if this error represents an operator abort
    pub fn is_cancelled(&self) -> bool {
        matches!(self, PromptError::Cancelled)
    }
}

/// Port for blocking question/answer exchanges with an operator.
///
/// Methods take `&mut self`: a session is driven by exactly one phase at
/// a time and may keep input buffers between questions.
pub trait PromptSession {
    /// Yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, PromptError>;

    /// Free-text question. The answer is never empty.
    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Non-negative integer question.
    ///
    /// An empty answer yields `default`. When `required` is set the
    /// session re-prompts instead of returning `None`.
    fn ask_number(
        &mut self,
        question: &str,
        default: Option<u32>,
        required: bool,
    ) -> Result<Option<u32>, PromptError>;

    /// Single choice among `options`. Returns one of `options` verbatim.
    fn choose(
        &mut self,
        question: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> Result<String, PromptError>;

    /// Render a table. `rows` have the same arity as `headers`.
    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> Result<(), PromptError>;
}

/// Session that answers every question with its default.
///
/// Questions without a default fail with [`PromptError::NoDefault`].
#[derive(Debug, Default)]
pub struct AcceptDefaults;

impl PromptSession for AcceptDefaults {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, PromptError> {
        debug!(question, default, "Accepting default confirmation");
        Ok(default)
    }

    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String, PromptError> {
        match default {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(PromptError::NoDefault(question.to_string())),
        }
    }

    fn ask_number(
        &mut self,
        question: &str,
        default: Option<u32>,
        required: bool,
    ) -> Result<Option<u32>, PromptError> {
        if required && default.is_none() {
            return Err(PromptError::NoDefault(question.to_string()));
        }
        Ok(default)
    }

    fn choose(
        &mut self,
        question: &str,
        options: &[&str],
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        match default {
            Some(value) if options.contains(&value) => Ok(value.to_string()),
            _ => Err(PromptError::NoDefault(question.to_string())),
        }
    }

    fn table(&mut self, _headers: &[&str], _rows: &[Vec<String>]) -> Result<(), PromptError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_defaults_confirm() {
        let mut session = AcceptDefaults;
        assert!(session.confirm("Proceed?", true).unwrap());
        assert!(!session.confirm("Add another?", false).unwrap());
    }

    #[test]
    fn test_accept_defaults_ask() {
        let mut session = AcceptDefaults;
        assert_eq!(session.ask("Queue", Some("default")).unwrap(), "default");
        assert_eq!(
            session.ask("Queue", None).unwrap_err(),
            PromptError::NoDefault("Queue".to_string())
        );
    }

    #[test]
    fn test_accept_defaults_number() {
        let mut session = AcceptDefaults;
        assert_eq!(session.ask_number("Sleep", Some(60), true).unwrap(), Some(60));
        assert_eq!(session.ask_number("Tries", None, false).unwrap(), None);
        assert!(session.ask_number("Sleep", None, true).is_err());
    }

    #[test]
    fn test_accept_defaults_choose_requires_offered_default() {
        let mut session = AcceptDefaults;
        let options = ["redis", "sqs"];
        assert_eq!(session.choose("Driver", &options, Some("sqs")).unwrap(), "sqs");
        assert!(session.choose("Driver", &options, None).is_err());
        assert!(session.choose("Driver", &options, Some("sync")).is_err());
    }

    #[test]
    fn test_cancelled_check() {
        assert!(PromptError::Cancelled.is_cancelled());
        assert!(!PromptError::Io("closed".to_string()).is_cancelled());
    }
}
