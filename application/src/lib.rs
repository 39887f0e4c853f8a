//! Application layer for queue-setup
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::SetupConfig;
pub use ports::{
    environment::{EnvironmentReader, MapEnvironment},
    prompt_session::{AcceptDefaults, PromptError, PromptSession},
    result_sink::{DeployResultSink, InstallResultSink},
};
pub use use_cases::build_deploy::DeployDescriptorBuilder;
pub use use_cases::build_install::InstallDescriptorBuilder;
pub use use_cases::collect_workers::WorkerCollector;
pub use use_cases::deploy_workers::DeployQueueWorkersUseCase;
pub use use_cases::error::SetupError;
pub use use_cases::install_queue::InstallQueueUseCase;
pub use use_cases::resolve_parameters::ParameterSet;
pub use use_cases::select_connection::ConnectionSelector;
