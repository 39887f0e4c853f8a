//! Install Queue use case
//!
//! Install phase: pick a backend (pre-selecting `sync`) and publish it.

use crate::ports::prompt_session::PromptSession;
use crate::ports::result_sink::InstallResultSink;
use crate::use_cases::build_install::InstallDescriptorBuilder;
use crate::use_cases::error::SetupError;
use crate::use_cases::select_connection::ConnectionSelector;
use queue_setup_domain::QueueConnection;
use tracing::info;

/// Use case for the install phase
#[derive(Debug, Default)]
pub struct InstallQueueUseCase;

impl InstallQueueUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the install phase, returning the selected connection.
    pub fn execute(
        &self,
        prompt: &mut dyn PromptSession,
        sink: &mut dyn InstallResultSink,
    ) -> Result<QueueConnection, SetupError> {
        info!("Starting queue install");

        let connection = ConnectionSelector::select(prompt, Some(QueueConnection::Sync))?;
        InstallDescriptorBuilder::build(Some(connection), sink);

        info!(%connection, "Queue install configured");
        Ok(connection)
    }
}
