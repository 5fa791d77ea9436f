//! Connection provider abstraction
//!
//! The persistence layer is an external collaborator reached only through
//! this object-safe trait. Rows travel as JSON objects keyed by column
//! name; params bind positionally to `?` placeholders. Connection scoping,
//! cancellation and timeouts are the provider's concern — callers never
//! retry a failed query.

use async_trait::async_trait;

use crate::StorageResult;

/// Scoped query/execute primitives over a database connection
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Execute a statement that returns no rows; yields rows affected
    async fn execute(&self, query: &str, params: &[serde_json::Value]) -> StorageResult<u64>;

    /// Fetch all rows of a query as JSON objects
    async fn fetch_all(
        &self,
        query: &str,
        params: &[serde_json::Value],
    ) -> StorageResult<Vec<serde_json::Value>>;

    /// Fetch exactly one row; the statement is expected to produce one
    /// (aggregates, `INSERT ... RETURNING`)
    async fn fetch_one(
        &self,
        query: &str,
        params: &[serde_json::Value],
    ) -> StorageResult<serde_json::Value>;

    /// Fetch zero or one row
    async fn fetch_optional(
        &self,
        query: &str,
        params: &[serde_json::Value],
    ) -> StorageResult<Option<serde_json::Value>>;

    /// Check if the underlying connection is healthy
    async fn ping(&self) -> StorageResult<bool>;
}
