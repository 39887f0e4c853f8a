//! Deploy descriptor builder

use crate::ports::result_sink::DeployResultSink;
use crate::use_cases::error::SetupError;
use queue_setup_domain::{
    DeployScriptPatch, QUEUE_CONNECTION_ENV, QUEUE_RESTART_COMMAND, WorkerSpec,
};
use tracing::debug;

/// Writes the deploy-phase result for a collected worker list.
#[derive(Debug, Clone)]
pub struct DeployDescriptorBuilder {
    php_binary: String,
}

impl DeployDescriptorBuilder {
    pub fn new(php_binary: impl Into<String>) -> Self {
        Self {
            php_binary: php_binary.into(),
        }
    }

    /// The restart directive registered on every deploy.
    pub fn restart_patch(&self) -> DeployScriptPatch {
        DeployScriptPatch::artisan_before_reload(&self.php_binary, QUEUE_RESTART_COMMAND)
    }

    /// Publish `workers` verbatim.
    ///
    /// `QUEUE_CONNECTION` is taken from the last worker, whatever the
    /// earlier ones use.
    pub fn build(
        &self,
        workers: Vec<WorkerSpec>,
        sink: &mut dyn DeployResultSink,
    ) -> Result<(), SetupError> {
        let connection = workers.last().ok_or(SetupError::NoWorkers)?.connection();

        sink.set_env_var(QUEUE_CONNECTION_ENV, connection.as_str());
        debug!(count = workers.len(), %connection, "Publishing queue workers");
        sink.set_workers(workers);
        sink.register_deploy_script_patch(self.restart_patch());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queue_setup_domain::{DeployDescriptor, ParameterValues, QueueConnection};

    /// Sink that counts every call
    #[derive(Default)]
    struct CountingSink {
        env_calls: usize,
        worker_calls: usize,
        patches: Vec<DeployScriptPatch>,
    }

    impl DeployResultSink for CountingSink {
        fn set_env_var(&mut self, _key: &str, _value: &str) {
            self.env_calls += 1;
        }

        fn set_workers(&mut self, _workers: Vec<WorkerSpec>) {
            self.worker_calls += 1;
        }

        fn register_deploy_script_patch(&mut self, patch: DeployScriptPatch) {
            self.patches.push(patch);
        }
    }

    fn worker(connection: QueueConnection) -> WorkerSpec {
        WorkerSpec::new(connection, "default", &ParameterValues::defaults()).unwrap()
    }

    #[test]
    fn test_env_uses_last_worker_connection() {
        let mut descriptor = DeployDescriptor::new();
        DeployDescriptorBuilder::new("$FORGE_PHP")
            .build(
                vec![worker(QueueConnection::Database), worker(QueueConnection::Redis)],
                &mut descriptor,
            )
            .unwrap();

        assert_eq!(descriptor.env_var("QUEUE_CONNECTION"), Some("redis"));
        assert_eq!(descriptor.workers.len(), 2);
        assert_eq!(descriptor.workers[0].connection(), QueueConnection::Database);
    }

    #[test]
    fn test_registers_restart_before_reload() {
        let mut descriptor = DeployDescriptor::new();
        DeployDescriptorBuilder::new("$FORGE_PHP")
            .build(vec![worker(QueueConnection::Sqs)], &mut descriptor)
            .unwrap();

        let patch = descriptor.deploy_script.unwrap();
        assert_eq!(patch.command, "$FORGE_PHP artisan queue:restart");
        assert!(patch.runs("queue:restart"));
    }

    #[test]
    fn test_patch_registered_once_regardless_of_worker_count() {
        for count in [1, 2, 5] {
            let mut sink = CountingSink::default();
            let workers = (0..count).map(|_| worker(QueueConnection::Redis)).collect();
            DeployDescriptorBuilder::new("php")
                .build(workers, &mut sink)
                .unwrap();

            assert_eq!(sink.patches.len(), 1);
            assert_eq!(sink.env_calls, 1);
            assert_eq!(sink.worker_calls, 1);
        }
    }

    #[test]
    fn test_empty_worker_list_is_rejected() {
        let mut sink = CountingSink::default();
        let err = DeployDescriptorBuilder::new("php")
            .build(Vec::new(), &mut sink)
            .unwrap_err();
        assert_eq!(err, SetupError::NoWorkers);
        assert!(sink.patches.is_empty());
        assert_eq!(sink.env_calls, 0);
    }
}
