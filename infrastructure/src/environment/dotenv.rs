//! `.env` file backed environment reader

use queue_setup_application::EnvironmentReader;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors reading a project env file
#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("Failed to parse env file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Snapshot of a project's `.env` file.
///
/// Only the file is consulted, never the process environment: the
/// project's own settings are what seed the defaults.
#[derive(Debug, Clone, Default)]
pub struct DotenvEnvironment {
    vars: HashMap<String, String>,
}

impl DotenvEnvironment {
    /// Read `path`. A missing file yields an empty environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EnvFileError> {
        let path = path.as_ref();
        let parse_error = |source| EnvFileError::Parse {
            path: path.to_path_buf(),
            source,
        };

        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                debug!(path = %path.display(), "No project env file");
                return Ok(Self::default());
            }
            Err(e) => return Err(parse_error(e)),
        };

        let vars = iter
            .collect::<Result<HashMap<_, _>, _>>()
            .map_err(parse_error)?;

        debug!(path = %path.display(), count = vars.len(), "Loaded project env file");
        Ok(Self { vars })
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvironmentReader for DotenvEnvironment {
    fn get(&self, key: &str, fallback: &str) -> String {
        self.vars
            .get(key)
            .cloned()
            .unwrap_or_else(|| fallback.to_string())
    }
}
