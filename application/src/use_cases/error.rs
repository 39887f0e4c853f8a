//! Errors surfaced by the setup use cases

use crate::ports::prompt_session::PromptError;
use queue_setup_domain::DomainError;
use thiserror::Error;

/// Errors that abort an install or deploy invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Prompt failed: {0}")]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No queue workers were collected")]
    NoWorkers,
}

impl SetupError {
    /// Check if the operator aborted the invocation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SetupError::Prompt(e) if e.is_cancelled())
    }
}
