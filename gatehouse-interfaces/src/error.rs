//! Storage error taxonomy
//!
//! A missing row is never an error here: single-entity lookups return
//! `Option` and zero-row writes return `false`. The variants below cover
//! caller mistakes (`Validation`, `Config`) and persistence faults, which
//! always propagate to the caller unchanged.

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage-related errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Caller-supplied arguments violate a precondition; raised before any I/O
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Constraint violation reported by the persistence layer (duplicate key, FK)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Connection-level failure (connectivity loss, pool exhaustion, timeout)
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// Query execution failure
    #[error("Query failed: {0}")]
    Query(String),

    /// Row could not be mapped to or from its entity
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StorageError {
    /// Check if this error is retryable by an outer layer. The repositories
    /// themselves never retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageError::Connection(_))
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Validation(_) => "VALIDATION_ERROR",
            StorageError::Constraint(_) => "CONSTRAINT_VIOLATION",
            StorageError::Connection(_) => "CONNECTION_ERROR",
            StorageError::Query(_) => "QUERY_ERROR",
            StorageError::Serialization(_) => "SERIALIZATION_ERROR",
            StorageError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}
