//! Connection selection
//!
//! Single-choice prompt over the closed set of queue backends.

use crate::ports::prompt_session::{PromptError, PromptSession};
use crate::use_cases::error::SetupError;
use queue_setup_domain::QueueConnection;
use tracing::debug;

pub const CONNECTION_QUESTION: &str = "Which queue driver would you like to use?";

/// Asks the operator for a queue backend.
pub struct ConnectionSelector;

impl ConnectionSelector {
    /// Offer every backend, pre-selecting `default` when given.
    pub fn select(
        prompt: &mut dyn PromptSession,
        default: Option<QueueConnection>,
    ) -> Result<QueueConnection, SetupError> {
        let options = QueueConnection::names();
        let answer = prompt.choose(
            CONNECTION_QUESTION,
            &options,
            default.map(|d| d.as_str()),
        )?;

        let connection = answer
            .parse::<QueueConnection>()
            .map_err(|_| PromptError::InvalidAnswer(answer.clone()))?;

        debug!(%connection, ?default, "Queue connection selected");
        Ok(connection)
    }
}
