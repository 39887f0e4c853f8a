//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown queue connection: {0}")]
    UnknownConnection(String),

    #[error("Parameter '{key}' expects a {expected} value")]
    ParameterKindMismatch {
        key: &'static str,
        expected: &'static str,
    },

    #[error("Missing value for parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("Queue name cannot be empty")]
    EmptyQueueName,
}

impl DomainError {
    /// Check if this error comes from an unrecognized connection name
    pub fn is_unknown_connection(&self) -> bool {
        matches!(self, DomainError::UnknownConnection(_))
    }
}
