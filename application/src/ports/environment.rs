//! Environment reader port.
//!
//! Gives read access to the project's prior local settings (typically its
//! `.env` file). Used once per deploy to seed the first worker's
//! connection default.

use std::collections::HashMap;

/// Port for reading project environment settings.
pub trait EnvironmentReader {
    /// Value of `key`, or `fallback` when unset.
    fn get(&self, key: &str, fallback: &str) -> String;
}

/// In-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl FromIterator<(String, String)> for MapEnvironment {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl EnvironmentReader for MapEnvironment {
    fn get(&self, key: &str, fallback: &str) -> String {
        self.vars
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}
