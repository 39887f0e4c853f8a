//! Install descriptor builder

use crate::ports::result_sink::InstallResultSink;
use queue_setup_domain::{QUEUE_CONNECTION_ENV, QUEUE_TABLE_COMMAND, QueueConnection};
use tracing::debug;

/// Writes the install-phase result for a chosen connection.
pub struct InstallDescriptorBuilder;

impl InstallDescriptorBuilder {
    /// `None` falls back to `sync`.
    pub fn build(connection: Option<QueueConnection>, sink: &mut dyn InstallResultSink) {
        let connection = connection.unwrap_or(QueueConnection::Sync);
        sink.set_env_var(QUEUE_CONNECTION_ENV, connection.as_str());

        if connection.needs_schema() {
            debug!(%connection, "Scheduling queue table creation");
            sink.add_install_command(QUEUE_TABLE_COMMAND);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use queue_setup_domain::InstallDescriptor;

    #[test]
    fn test_database_schedules_queue_table() {
        let mut descriptor = InstallDescriptor::new();
        InstallDescriptorBuilder::build(Some(QueueConnection::Database), &mut descriptor);
        assert_eq!(descriptor.env_var("QUEUE_CONNECTION"), Some("database"));
        assert_eq!(descriptor.commands, vec!["queue:table".to_string()]);
    }

    #[test]
    fn test_other_backends_have_no_install_commands() {
        for connection in [
            QueueConnection::Beanstalkd,
            QueueConnection::Redis,
            QueueConnection::Sqs,
            QueueConnection::Sync,
        ] {
            let mut descriptor = InstallDescriptor::new();
            InstallDescriptorBuilder::build(Some(connection), &mut descriptor);
            assert_eq!(descriptor.env_var("QUEUE_CONNECTION"), Some(connection.as_str()));
            assert!(descriptor.commands.is_empty());
        }
    }

    #[test]
    fn test_unset_connection_falls_back_to_sync() {
        let mut descriptor = InstallDescriptor::new();
        InstallDescriptorBuilder::build(None, &mut descriptor);
        assert_eq!(descriptor.env_var("QUEUE_CONNECTION"), Some("sync"));
        assert!(descriptor.commands.is_empty());
    }
}
