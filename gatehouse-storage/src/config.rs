//! Storage configuration

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use gatehouse_interfaces::{StorageError, StorageResult};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend type
    pub backend: StorageBackend,

    /// Connection configuration
    pub connection: ConnectionConfig,

    /// Performance and diagnostics settings
    pub performance: PerformanceConfig,
}

/// Storage backend type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageBackend {
    /// SQLite backend (default)
    Sqlite {
        /// Database file path
        database_path: PathBuf,
        /// Auto-create directory if it doesn't exist
        auto_create_dir: bool,
    },

    /// In-memory backend (for testing)
    InMemory,
}

/// Connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection timeout
    pub connect_timeout: Duration,

    /// Query timeout
    pub query_timeout: Duration,

    /// Idle timeout before closing connections
    pub idle_timeout: Option<Duration>,
}

/// Performance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceConfig {
    /// Enable query logging
    pub query_logging: bool,

    /// Log slow queries above this threshold
    pub slow_query_threshold: Duration,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite {
                database_path: PathBuf::from("gatehouse.db"),
                auto_create_dir: true,
            },
            connection: ConnectionConfig::default(),
            performance: PerformanceConfig::default(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            query_timeout: Duration::from_secs(60),
            idle_timeout: Some(Duration::from_secs(600)), // 10 minutes
        }
    }
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            query_logging: cfg!(debug_assertions),
            slow_query_threshold: Duration::from_millis(100),
        }
    }
}

impl StorageConfig {
    /// Create a new configuration for SQLite
    pub fn sqlite<P: Into<PathBuf>>(database_path: P) -> Self {
        Self {
            backend: StorageBackend::Sqlite {
                database_path: database_path.into(),
                auto_create_dir: true,
            },
            ..Default::default()
        }
    }

    /// Create a new in-memory configuration (for testing)
    pub fn in_memory() -> Self {
        Self {
            backend: StorageBackend::InMemory,
            ..Default::default()
        }
    }

    /// Get the connection URL for the backend
    pub fn connection_url(&self) -> String {
        match &self.backend {
            StorageBackend::Sqlite { database_path, .. } => {
                format!("sqlite://{}?mode=rwc", database_path.display())
            }
            StorageBackend::InMemory => "sqlite://:memory:".to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> StorageResult<()> {
        if self.connection.max_connections == 0 {
            return Err(StorageError::Config(
                "max_connections must be greater than 0".to_string(),
            ));
        }

        if self.connection.min_connections > self.connection.max_connections {
            return Err(StorageError::Config(
                "min_connections cannot be greater than max_connections".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorageConfig::default();
        assert!(config.validate().is_ok());

        match config.backend {
            StorageBackend::Sqlite {
                database_path,
                auto_create_dir,
            } => {
                assert_eq!(database_path, PathBuf::from("gatehouse.db"));
                assert!(auto_create_dir);
            }
            _ => panic!("Expected SQLite backend"),
        }
    }

    #[test]
    fn test_sqlite_config() {
        let config = StorageConfig::sqlite("/tmp/test.db");
        assert!(config.validate().is_ok());
        assert!(config.connection_url().starts_with("sqlite://"));
    }

    #[test]
    fn test_in_memory_config() {
        let config = StorageConfig::in_memory();
        assert!(config.validate().is_ok());
        assert_eq!(config.connection_url(), "sqlite://:memory:");
    }

    #[test]
    fn test_config_validation() {
        let mut config = StorageConfig::default();

        config.connection.max_connections = 0;
        assert!(config.validate().is_err());

        config.connection.max_connections = 5;
        config.connection.min_connections = 10;
        assert!(config.validate().is_err());
    }
}
