//! Deploy-script mutation directive

use serde::{Deserialize, Serialize};

/// Where in the host's deploy script a command is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchPlacement {
    /// Immediately before the PHP process reload step.
    BeforePhpReload,
}

/// Directive asking the host to insert a line into its deploy script.
///
/// The host applies it idempotently: a line already present is not
/// inserted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployScriptPatch {
    pub command: String,
    pub placement: PatchPlacement,
}

impl DeployScriptPatch {
    /// An artisan command run with the host's PHP binary placeholder,
    /// placed before the PHP reload.
    pub fn artisan_before_reload(php_binary: &str, command: &str) -> Self {
        Self {
            command: format!("{} artisan {}", php_binary, command),
            placement: PatchPlacement::BeforePhpReload,
        }
    }

    /// Whether the inserted line runs the given command.
    pub fn runs(&self, command: &str) -> bool {
        self.command.contains(command)
    }
}

impl std::fmt::Display for DeployScriptPatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.placement {
            PatchPlacement::BeforePhpReload => {
                write!(f, "insert `{}` before PHP reload", self.command)
            }
        }
    }
}
