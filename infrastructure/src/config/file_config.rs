//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use queue_setup_application::SetupConfig;
use queue_setup_application::config::DEFAULT_PHP_BINARY;
use queue_setup_domain::QueueConnection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("environment.file cannot be empty")]
    EmptyEnvFile,

    #[error("deploy.php_binary cannot be empty")]
    EmptyPhpBinary,

    #[error("logging.file_name cannot be empty")]
    EmptyLogFileName,
}

/// Raw project environment configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEnvironmentConfig {
    /// Project env file read for the previous queue connection
    pub file: String,
    /// Connection assumed when the env file does not set one
    pub fallback_connection: QueueConnection,
}

impl Default for FileEnvironmentConfig {
    fn default() -> Self {
        Self {
            file: ".env".to_string(),
            fallback_connection: QueueConnection::Database,
        }
    }
}

/// Raw deploy configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeployConfig {
    /// PHP binary placeholder used in the deploy script
    pub php_binary: String,
}

impl Default for FileDeployConfig {
    fn default() -> Self {
        Self {
            php_binary: DEFAULT_PHP_BINARY.to_string(),
        }
    }
}

/// Descriptor output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOutputFormat {
    /// Machine-readable JSON (default)
    #[default]
    Json,
    /// Human-readable summary
    Summary,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    pub format: FileOutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: FileOutputFormat::Json,
            color: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for the log file; file logging is off when unset
    pub directory: Option<String>,
    pub file_name: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: "queue-setup.log".to_string(),
        }
    }
}

/// Complete file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub environment: FileEnvironmentConfig,
    pub deploy: FileDeployConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.environment.file.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEnvFile);
        }

        if self.deploy.php_binary.trim().is_empty() {
            return Err(ConfigValidationError::EmptyPhpBinary);
        }

        if self.logging.file_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogFileName);
        }

        Ok(())
    }

    /// Application settings derived from this file config
    pub fn setup_config(&self) -> SetupConfig {
        SetupConfig::default()
            .with_fallback_connection(self.environment.fallback_connection)
            .with_php_binary(self.deploy.php_binary.as_str())
    }

    /// Render as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
