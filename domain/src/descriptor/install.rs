//! Install-phase descriptor

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of the install phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallDescriptor {
    /// Environment variables to persist, ordered by key.
    pub env: BTreeMap<String, String>,
    /// Command tokens the host runs once, in insertion order.
    pub commands: Vec<String>,
}

impl InstallDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }
}
