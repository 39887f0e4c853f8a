//! Deploy-phase descriptor

use super::patch::DeployScriptPatch;
use crate::worker::WorkerSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of the deploy phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployDescriptor {
    /// Environment variables to persist, ordered by key.
    pub env: BTreeMap<String, String>,
    /// Workers in creation order.
    pub workers: Vec<WorkerSpec>,
    /// Deploy-script mutation, if one was registered.
    pub deploy_script: Option<DeployScriptPatch>,
}

impl DeployDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }
}
