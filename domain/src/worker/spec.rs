//! Worker specification entity

use crate::core::error::DomainError;
use crate::queue::QueueConnection;
use crate::worker::parameter::{ParameterKey, ParameterValue, ParameterValues};
use serde::{Deserialize, Serialize};

/// A fully-specified queue worker (Entity).
///
/// Serializes as a flat record whose keys follow the field order below.
/// Fields are private: a spec is immutable once built. Deserialization
/// goes through [`WorkerSpec::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WorkerRecord")]
pub struct WorkerSpec {
    connection: QueueConnection,
    queue: String,
    timeout: u32,
    sleep: u32,
    processes: u32,
    stopwaitsecs: u32,
    daemon: bool,
    force: bool,
    tries: Option<u32>,
}

impl WorkerSpec {
    /// Build a spec from a connection, a queue name and one resolution
    /// pass of the worker parameters.
    pub fn new(
        connection: QueueConnection,
        queue: impl Into<String>,
        params: &ParameterValues,
    ) -> Result<Self, DomainError> {
        let queue = queue.into();
        if queue.trim().is_empty() {
            return Err(DomainError::EmptyQueueName);
        }

        Ok(Self {
            connection,
            queue,
            timeout: params.int(ParameterKey::Timeout)?,
            sleep: params.int(ParameterKey::Sleep)?,
            processes: params.int(ParameterKey::Processes)?,
            stopwaitsecs: params.int(ParameterKey::StopWaitSecs)?,
            daemon: params.bool(ParameterKey::Daemon)?,
            force: params.bool(ParameterKey::Force)?,
            tries: params.nullable_int(ParameterKey::Tries)?,
        })
    }

    pub fn connection(&self) -> QueueConnection {
        self.connection
    }

    pub fn queue(&self) -> &str {
        &self.queue
    }

    pub fn timeout(&self) -> u32 {
        self.timeout
    }

    pub fn sleep(&self) -> u32 {
        self.sleep
    }

    pub fn processes(&self) -> u32 {
        self.processes
    }

    pub fn stopwaitsecs(&self) -> u32 {
        self.stopwaitsecs
    }

    pub fn daemon(&self) -> bool {
        self.daemon
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn tries(&self) -> Option<u32> {
        self.tries
    }
}

/// Unchecked wire form of a [`WorkerSpec`].
#[derive(Deserialize)]
struct WorkerRecord {
    connection: QueueConnection,
    queue: String,
    timeout: u32,
    sleep: u32,
    processes: u32,
    stopwaitsecs: u32,
    daemon: bool,
    force: bool,
    tries: Option<u32>,
}

impl TryFrom<WorkerRecord> for WorkerSpec {
    type Error = DomainError;

    fn try_from(record: WorkerRecord) -> Result<Self, Self::Error> {
        let params: ParameterValues = [
            (ParameterKey::Timeout, ParameterValue::Int(record.timeout)),
            (ParameterKey::Sleep, ParameterValue::Int(record.sleep)),
            (ParameterKey::Processes, ParameterValue::Int(record.processes)),
            (ParameterKey::StopWaitSecs, ParameterValue::Int(record.stopwaitsecs)),
            (ParameterKey::Daemon, ParameterValue::Bool(record.daemon)),
            (ParameterKey::Force, ParameterValue::Bool(record.force)),
            (ParameterKey::Tries, ParameterValue::NullableInt(record.tries)),
        ]
        .into_iter()
        .collect();

        Self::new(record.connection, record.queue, &params)
    }
}

impl std::fmt::Display for WorkerSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} (processes={}, sleep={}s)",
            self.connection, self.queue, self.processes, self.sleep
        )
    }
}
