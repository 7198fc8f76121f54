//! Server configuration module

use clap::Parser;

use crate::config::{db::DatabaseConfig, observability::LoggingConfig, server::ServerRuntimeConfig};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Inventory JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "inventory-json", about = "Inventory JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product store settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use testresult::TestResult;

    use super::{observability::LogFormat, *};

    #[test]
    fn test_defaults_apply_when_only_database_url_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "inventory-json",
            "--database-url",
            "postgres://localhost/inventory",
        ])?;

        assert_eq!(config.database.database_url, "postgres://localhost/inventory");
        assert_eq!(config.database.database_max_connections, 10);
        assert!(matches!(config.logging.log_format, LogFormat::Compact));
        assert_eq!(
            config.logging.slow_request_threshold(),
            Duration::from_millis(1_000)
        );

        Ok(())
    }

    #[test]
    fn test_socket_addr_joins_host_and_port() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "inventory-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--database-url",
            "postgres://localhost/inventory",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000");

        Ok(())
    }
}
