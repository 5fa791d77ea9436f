//! Ticket repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use tracing::debug;

use gatehouse_interfaces::{ConnectionProvider, Repository, StorageResult};
use gatehouse_types::{GroupedRow, Ticket, VisitRow};

use crate::record;
use crate::sql;
use crate::table::TableRepository;

/// Repository for ticket-related database operations
#[derive(Clone)]
pub struct TicketRepository {
    provider: Arc<dyn ConnectionProvider>,
    base: TableRepository<Ticket>,
}

impl TicketRepository {
    /// Create a new ticket repository
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            base: TableRepository::new(provider.clone()),
            provider,
        }
    }

    /// Generic CRUD surface for the tickets table
    pub fn base(&self) -> &TableRepository<Ticket> {
        &self.base
    }
}

#[async_trait]
impl Repository for TicketRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl gatehouse_interfaces::TicketRepository for TicketRepository {
    async fn find_valid_visits(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<VisitRow>> {
        let mut conditions = vec!["t.status IN ('confirmed', 'used')".to_string()];
        let mut params = Vec::new();
        sql::push_date_range(&mut conditions, &mut params, "date(t.visit_at)", start, end);

        let statement = format!(
            "SELECT t.client_id AS client_id, \
                    date(t.visit_at) AS day, \
                    CAST(strftime('%H', t.visit_at) AS INTEGER) AS hour, \
                    c.date_of_birth AS birth_date \
             FROM tickets t \
             INNER JOIN clients c ON t.client_id = c.id{} \
             ORDER BY day ASC, hour ASC",
            sql::where_clause(&conditions)
        );

        debug!(?start, ?end, "querying attended visits");
        let rows = self.provider.fetch_all(&statement, &params).await?;
        record::from_rows(rows)
    }

    async fn find_expiring_before(&self, cutoff: DateTime<Utc>) -> StorageResult<Vec<Ticket>> {
        let statement = format!(
            "SELECT {} FROM tickets \
             WHERE valid_until < ? AND status IN ('issued', 'confirmed') \
             ORDER BY valid_until ASC",
            sql::select_list::<Ticket>()
        );
        let rows = self.provider.fetch_all(&statement, &[json!(cutoff)]).await?;
        record::from_rows(rows)
    }

    async fn type_breakdown(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>> {
        let mut conditions = Vec::new();
        let mut params = Vec::new();
        sql::push_date_range(&mut conditions, &mut params, "date(visit_at)", start, end);

        let statement = format!(
            "SELECT ticket_type AS label, \
                    COUNT(*) AS count, \
                    COALESCE(SUM(price), 0) AS amount \
             FROM tickets{} \
             GROUP BY ticket_type \
             ORDER BY count DESC",
            sql::where_clause(&conditions)
        );

        let rows = self.provider.fetch_all(&statement, &params).await?;
        record::from_rows(rows)
    }

    async fn mark_used(&self, id: i32) -> StorageResult<bool> {
        let affected = self
            .provider
            .execute(
                "UPDATE tickets SET status = 'used' WHERE id = ?",
                &[json!(id)],
            )
            .await?;
        Ok(affected == 1)
    }
}
