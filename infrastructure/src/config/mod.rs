//! Configuration file loading for queue-setup
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUEUE_SETUP_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./queue-setup.toml` or `./.queue-setup.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/queue-setup/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDeployConfig, FileEnvironmentConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
