//! Domain layer for queue-setup
//!
//! This crate contains the value objects and entities describing queue
//! workers. It has no dependencies on prompting, files or the terminal.
//!
//! # Core Concepts
//!
//! ## Connection
//!
//! The queue backend a worker consumes jobs from. One of a closed set of
//! five drivers, see [`QueueConnection`].
//!
//! ## Worker
//!
//! A [`WorkerSpec`] is a connection, a queue name and the seven tunables
//! declared in [`WORKER_PARAMETERS`].
//!
//! ## Descriptors
//!
//! What each pipeline phase hands back to the host:
//! [`InstallDescriptor`] and [`DeployDescriptor`].

pub mod core;
pub mod descriptor;
pub mod queue;
pub mod worker;

// Re-export commonly used types
pub use core::error::DomainError;
pub use descriptor::{
    DeployDescriptor, DeployScriptPatch, InstallDescriptor, PatchPlacement,
    QUEUE_CONNECTION_ENV, QUEUE_RESTART_COMMAND, QUEUE_TABLE_COMMAND,
};
pub use queue::QueueConnection;
pub use worker::{
    ParameterDefinition, ParameterKey, ParameterKind, ParameterValue, ParameterValues,
    WORKER_PARAMETERS, WorkerSpec,
};
