//! Worker domain module.
//!
//! - [`parameter`]: the fixed schema of tunable worker parameters
//! - [`spec::WorkerSpec`]: one fully-specified worker definition

pub mod parameter;
pub mod spec;

pub use parameter::{
    ParameterDefinition, ParameterKey, ParameterKind, ParameterValue, ParameterValues,
    WORKER_PARAMETERS,
};
pub use spec::WorkerSpec;
