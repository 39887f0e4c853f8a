//! Deploy Queue Workers use case
//!
//! Deploy phase: collect worker definitions and publish the deployment
//! descriptor.
//!
//! # Flow
//!
//! ```text
//! "Do you want to add a queue worker?"   (asked, never gates)
//!        ↓
//! QUEUE_CONNECTION from project env      (first-worker hint)
//!        ↓
//! WorkerCollector::collect()             (≥ 1 worker)
//!        ↓
//! DeployDescriptorBuilder::build()
//! ```

use crate::config::SetupConfig;
use crate::ports::environment::EnvironmentReader;
use crate::ports::prompt_session::PromptSession;
use crate::ports::result_sink::DeployResultSink;
use crate::use_cases::build_deploy::DeployDescriptorBuilder;
use crate::use_cases::collect_workers::WorkerCollector;
use crate::use_cases::error::SetupError;
use queue_setup_domain::{QUEUE_CONNECTION_ENV, QueueConnection};
use tracing::{debug, info, warn};

pub const ADD_WORKER_QUESTION: &str = "Do you want to add a queue worker?";

/// Use case for the deploy phase
#[derive(Debug, Clone, Default)]
pub struct DeployQueueWorkersUseCase {
    config: SetupConfig,
}

impl DeployQueueWorkersUseCase {
    pub fn new(config: SetupConfig) -> Self {
        Self { config }
    }

    /// Execute the deploy phase, returning the number of workers published.
    pub fn execute(
        &self,
        prompt: &mut dyn PromptSession,
        env: &dyn EnvironmentReader,
        sink: &mut dyn DeployResultSink,
    ) -> Result<usize, SetupError> {
        info!("Starting queue worker deploy");

        // The collection loop always runs once; this answer is informational.
        let wants_worker = prompt.confirm(ADD_WORKER_QUESTION, true)?;
        debug!(wants_worker, "Initial worker confirmation");

        let hint = self.connection_hint(env);
        let workers = WorkerCollector::default().collect(prompt, hint)?;
        let count = workers.len();

        DeployDescriptorBuilder::new(self.config.php_binary.as_str()).build(workers, sink)?;

        info!(count, "Queue workers configured");
        Ok(count)
    }

    /// Connection previously configured for the project, if recognizable.
    fn connection_hint(&self, env: &dyn EnvironmentReader) -> Option<QueueConnection> {
        let value = env.get(
            QUEUE_CONNECTION_ENV,
            self.config.fallback_connection.as_str(),
        );
        match value.parse::<QueueConnection>() {
            Ok(connection) => Some(connection),
            Err(e) => {
                warn!(value = %value, error = %e, "Ignoring project queue connection");
                None
            }
        }
    }
}
