//! Application-level configuration.
//!
//! Controls the parts of the deploy phase that vary between hosts.

use queue_setup_domain::QueueConnection;

/// Default PHP binary placeholder understood by the host's deploy script.
pub const DEFAULT_PHP_BINARY: &str = "$FORGE_PHP";

/// Setup behavior configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Connection assumed when the project environment has none.
    pub fallback_connection: QueueConnection,
    /// PHP binary used in the deploy-script restart line.
    pub php_binary: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            fallback_connection: QueueConnection::Database,
            php_binary: DEFAULT_PHP_BINARY.to_string(),
        }
    }
}

impl SetupConfig {
    pub fn with_fallback_connection(mut self, connection: QueueConnection) -> Self {
        self.fallback_connection = connection;
        self
    }

    pub fn with_php_binary(mut self, php_binary: impl Into<String>) -> Self {
        self.php_binary = php_binary.into();
        self
    }
}
