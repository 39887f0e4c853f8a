//! Queue connection value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Queue backend driver selected for a worker.
///
/// The declaration order is the order in which the backends are offered
/// to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueConnection {
    Beanstalkd,
    Database,
    Redis,
    Sqs,
    /// Jobs run inline; no worker process is needed.
    Sync,
}

impl QueueConnection {
    /// All backends, in presentation order.
    pub const ALL: [QueueConnection; 5] = [
        QueueConnection::Beanstalkd,
        QueueConnection::Database,
        QueueConnection::Redis,
        QueueConnection::Sqs,
        QueueConnection::Sync,
    ];

    /// Returns the canonical (environment/config) name.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueConnection::Beanstalkd => "beanstalkd",
            QueueConnection::Database => "database",
            QueueConnection::Redis => "redis",
            QueueConnection::Sqs => "sqs",
            QueueConnection::Sync => "sync",
        }
    }

    /// Canonical names of every backend, in presentation order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(QueueConnection::as_str).collect()
    }

    /// Whether this backend stores jobs in a table that must be created
    /// before the first deploy.
    pub fn needs_schema(&self) -> bool {
        matches!(self, QueueConnection::Database)
    }

    /// Whether this backend is usable as a pre-selected default for the
    /// first worker. `sync` never is: a worker on it would do nothing.
    pub fn is_worker_default(&self) -> bool {
        !matches!(self, QueueConnection::Sync)
    }
}

impl std::str::FromStr for QueueConnection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beanstalkd" => Ok(QueueConnection::Beanstalkd),
            "database" => Ok(QueueConnection::Database),
            "redis" => Ok(QueueConnection::Redis),
            "sqs" => Ok(QueueConnection::Sqs),
            "sync" => Ok(QueueConnection::Sync),
            _ => Err(DomainError::UnknownConnection(s.to_string())),
        }
    }
}

impl std::fmt::Display for QueueConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_in_presentation_order() {
        assert_eq!(
            QueueConnection::names(),
            vec!["beanstalkd", "database", "redis", "sqs", "sync"]
        );
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!(
            "Redis".parse::<QueueConnection>().unwrap(),
            QueueConnection::Redis
        );
        assert_eq!(
            " database ".parse::<QueueConnection>().unwrap(),
            QueueConnection::Database
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "rabbitmq".parse::<QueueConnection>().unwrap_err();
        assert!(err.is_unknown_connection());
    }

    #[test]
    fn test_only_database_needs_schema() {
        for connection in QueueConnection::ALL {
            assert_eq!(
                connection.needs_schema(),
                connection == QueueConnection::Database
            );
        }
    }

    #[test]
    fn test_sync_is_not_a_worker_default() {
        assert!(!QueueConnection::Sync.is_worker_default());
        assert!(QueueConnection::Redis.is_worker_default());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&QueueConnection::Sqs).unwrap();
        assert_eq!(json, "\"sqs\"");
        let parsed: QueueConnection = serde_json::from_str("\"beanstalkd\"").unwrap();
        assert_eq!(parsed, QueueConnection::Beanstalkd);
    }
}
