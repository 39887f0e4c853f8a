//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_deploy;
pub mod build_install;
pub mod collect_workers;
pub mod deploy_workers;
pub mod error;
pub mod install_queue;
pub mod resolve_parameters;
pub mod select_connection;
