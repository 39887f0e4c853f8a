//! Result sink ports.
//!
//! Builders write phase results through these ports rather than
//! returning them, so the host decides how they are persisted. The
//! domain descriptors implement both sinks for in-memory collection.

use queue_setup_domain::{DeployDescriptor, DeployScriptPatch, InstallDescriptor, WorkerSpec};

/// Sink for install-phase results.
pub trait InstallResultSink {
    fn set_env_var(&mut self, key: &str, value: &str);

    fn add_install_command(&mut self, token: &str);
}

/// Sink for deploy-phase results.
pub trait DeployResultSink {
    fn set_env_var(&mut self, key: &str, value: &str);

    fn set_workers(&mut self, workers: Vec<WorkerSpec>);

    fn register_deploy_script_patch(&mut self, patch: DeployScriptPatch);
}

impl InstallResultSink for InstallDescriptor {
    fn set_env_var(&mut self, key: &str, value: &str) {
        self.env.insert(key.to_string(), value.to_string());
    }

    fn add_install_command(&mut self, token: &str) {
        self.commands.push(token.to_string());
    }
}

impl DeployResultSink for DeployDescriptor {
    fn set_env_var(&mut self, key: &str, value: &str) {
        self.env.insert(key.to_string(), value.to_string());
    }

    fn set_workers(&mut self, workers: Vec<WorkerSpec>) {
        self.workers = workers;
    }

    fn register_deploy_script_patch(&mut self, patch: DeployScriptPatch) {
        self.deploy_script = Some(patch);
    }
}
