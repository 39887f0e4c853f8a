//! JSON descriptor writer
//!
//! Persists phase descriptors for the host pipeline, either to a file or
//! to a caller-supplied stream (normally stdout).

use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors writing a descriptor
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize descriptor: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write descriptor: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes descriptors as pretty-printed JSON
pub struct DescriptorWriter;

impl DescriptorWriter {
    pub fn to_json<T: Serialize>(descriptor: &T) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(descriptor)?)
    }

    /// Write to `out`, followed by a newline
    pub fn write<T: Serialize>(descriptor: &T, out: &mut dyn Write) -> Result<(), OutputError> {
        let json = Self::to_json(descriptor)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Write to `path`, creating parent directories
    pub fn write_file<T: Serialize>(descriptor: &T, path: &Path) -> Result<(), OutputError> {
        let file_error = |source| OutputError::File {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(file_error)?;
        }

        let json = Self::to_json(descriptor)?;
        fs::write(path, json + "\n").map_err(file_error)?;
        info!(path = %path.display(), "Descriptor written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queue_setup_domain::{
        DeployDescriptor, DeployScriptPatch, InstallDescriptor, ParameterValues, QueueConnection,
        WorkerSpec,
    };
    use tempfile::TempDir;

    fn deploy_descriptor() -> DeployDescriptor {
        let mut descriptor = DeployDescriptor::new();
        descriptor
            .env
            .insert("QUEUE_CONNECTION".to_string(), "redis".to_string());
        descriptor.workers.push(
            WorkerSpec::new(QueueConnection::Redis, "default", &ParameterValues::defaults())
                .unwrap(),
        );
        descriptor.deploy_script = Some(DeployScriptPatch::artisan_before_reload(
            "$FORGE_PHP",
            "queue:restart",
        ));
        descriptor
    }

    #[test]
    fn test_write_to_stream() {
        let mut buffer = Vec::new();
        DescriptorWriter::write(&deploy_descriptor(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["env"]["QUEUE_CONNECTION"], "redis");
        assert_eq!(value["workers"][0]["queue"], "default");
        assert!(value["workers"][0]["tries"].is_null());
        assert_eq!(value["deploy_script"]["placement"], "before_php_reload");
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("install.json");
        let mut descriptor = InstallDescriptor::new();
        descriptor.commands.push("queue:table".to_string());

        DescriptorWriter::write_file(&descriptor, &path).unwrap();

        let parsed: InstallDescriptor =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, descriptor);
    }
}
