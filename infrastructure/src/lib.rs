//! Infrastructure layer for queue-setup
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod environment;
pub mod output;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDeployConfig, FileEnvironmentConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat,
};
pub use environment::{DotenvEnvironment, EnvFileError};
pub use output::{DescriptorWriter, OutputError};
