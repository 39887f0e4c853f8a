//! Worker collection
//!
//! Repeats connection → queue → parameters until the operator stops
//! adding workers. The first iteration always runs.
//!
//! ```text
//! iteration 0: connection (default = hint) → queue → parameters → add another?
//!       ↓ yes
//! iteration 1: connection (no default) → queue → parameters → add another?
//!       ↓ no
//! [worker 0, worker 1]
//! ```

use crate::ports::prompt_session::PromptSession;
use crate::use_cases::error::SetupError;
use crate::use_cases::resolve_parameters::ParameterSet;
use crate::use_cases::select_connection::ConnectionSelector;
use queue_setup_domain::{QueueConnection, WorkerSpec};
use tracing::{debug, info};

pub const QUEUE_QUESTION: &str = "Queue";
pub const DEFAULT_QUEUE: &str = "default";
pub const ADD_ANOTHER_QUESTION: &str = "Do you want to add another queue worker?";

/// Collects an ordered list of worker definitions.
#[derive(Debug, Clone, Copy)]
pub struct WorkerCollector<'a> {
    parameters: ParameterSet<'a>,
}

impl Default for WorkerCollector<'static> {
    fn default() -> Self {
        Self::new(ParameterSet::default())
    }
}

impl<'a> WorkerCollector<'a> {
    pub fn new(parameters: ParameterSet<'a>) -> Self {
        Self { parameters }
    }

    /// Run the collection loop.
    ///
    /// `initial_hint` pre-selects the connection of the first worker only;
    /// a `sync` hint offers no default. The result is never empty.
    pub fn collect(
        &self,
        prompt: &mut dyn PromptSession,
        initial_hint: Option<QueueConnection>,
    ) -> Result<Vec<WorkerSpec>, SetupError> {
        let first_default = initial_hint.filter(QueueConnection::is_worker_default);
        let mut workers = Vec::new();

        for iteration in 0usize.. {
            let default = Self::connection_default(iteration, first_default);
            let worker = self.collect_one(prompt, default)?;
            info!(iteration, %worker, "Queue worker added");
            workers.push(worker);

            if !prompt.confirm(ADD_ANOTHER_QUESTION, false)? {
                break;
            }
        }

        debug!(count = workers.len(), "Worker collection finished");
        Ok(workers)
    }

    fn connection_default(
        iteration: usize,
        first_default: Option<QueueConnection>,
    ) -> Option<QueueConnection> {
        if iteration == 0 { first_default } else { None }
    }

    fn collect_one(
        &self,
        prompt: &mut dyn PromptSession,
        default: Option<QueueConnection>,
    ) -> Result<WorkerSpec, SetupError> {
        let connection = ConnectionSelector::select(prompt, default)?;
        let queue = prompt.ask(QUEUE_QUESTION, Some(DEFAULT_QUEUE))?;
        let params = self.parameters.resolve(prompt)?;
        Ok(WorkerSpec::new(connection, queue, &params)?)
    }
}
