//! Client repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use tracing::debug;

use gatehouse_interfaces::{ConnectionProvider, Repository, StorageResult};
use gatehouse_types::{Client, DailyCount, TopSpender};

use crate::record;
use crate::repositories::{f64_field, u64_field};
use crate::sql;
use crate::table::TableRepository;

/// Repository for client-related database operations
#[derive(Clone)]
pub struct ClientRepository {
    provider: Arc<dyn ConnectionProvider>,
    base: TableRepository<Client>,
}

impl ClientRepository {
    /// Create a new client repository
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            base: TableRepository::new(provider.clone()),
            provider,
        }
    }

    /// Generic CRUD surface for the clients table
    pub fn base(&self) -> &TableRepository<Client> {
        &self.base
    }

    async fn count_scalar(
        &self,
        statement: &str,
        params: &[serde_json::Value],
    ) -> StorageResult<u64> {
        let row = self.provider.fetch_one(statement, params).await?;
        u64_field(&row, "count")
    }
}

#[async_trait]
impl Repository for ClientRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl gatehouse_interfaces::ClientRepository for ClientRepository {
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<Client>> {
        let statement = format!(
            "SELECT {} FROM clients WHERE email = ?",
            sql::select_list::<Client>()
        );
        let row = self.provider.fetch_optional(&statement, &[json!(email)]).await?;
        row.map(record::from_row).transpose()
    }

    async fn find_active(&self) -> StorageResult<Vec<Client>> {
        let statement = format!(
            "SELECT {} FROM clients WHERE is_active = 1 ORDER BY full_name ASC",
            sql::select_list::<Client>()
        );
        let rows = self.provider.fetch_all(&statement, &[]).await?;
        record::from_rows(rows)
    }

    async fn count_all(&self) -> StorageResult<u64> {
        self.count_scalar("SELECT COUNT(*) AS count FROM clients", &[])
            .await
    }

    async fn count_active(&self) -> StorageResult<u64> {
        self.count_scalar(
            "SELECT COUNT(*) AS count FROM clients WHERE is_active = 1",
            &[],
        )
        .await
    }

    async fn count_created_since(&self, since: DateTime<Utc>) -> StorageResult<u64> {
        self.count_scalar(
            "SELECT COUNT(*) AS count FROM clients WHERE created_at >= ?",
            &[json!(since)],
        )
        .await
    }

    async fn total_spend(&self) -> StorageResult<f64> {
        let row = self
            .provider
            .fetch_one(
                "SELECT COALESCE(SUM(total_amount), 0) AS total \
                 FROM orders WHERE status IN ('paid', 'completed')",
                &[],
            )
            .await?;
        f64_field(&row, "total")
    }

    async fn top_spenders(&self, limit: u32) -> StorageResult<Vec<TopSpender>> {
        debug!(limit, "querying top spenders");
        let rows = self
            .provider
            .fetch_all(
                "SELECT c.id AS client_id, c.full_name AS full_name, \
                        COUNT(o.id) AS order_count, \
                        COALESCE(SUM(o.total_amount), 0) AS total_spent \
                 FROM clients c \
                 INNER JOIN orders o ON o.client_id = c.id \
                 WHERE o.status IN ('paid', 'completed') \
                 GROUP BY c.id, c.full_name \
                 ORDER BY total_spent DESC \
                 LIMIT ?",
                &[json!(limit)],
            )
            .await?;
        record::from_rows(rows)
    }

    async fn registrations_per_day(&self, since: NaiveDate) -> StorageResult<Vec<DailyCount>> {
        let rows = self
            .provider
            .fetch_all(
                "SELECT date(created_at) AS day, COUNT(*) AS count \
                 FROM clients \
                 WHERE date(created_at) >= ? \
                 GROUP BY day \
                 ORDER BY day ASC",
                &[json!(since)],
            )
            .await?;
        record::from_rows(rows)
    }
}
