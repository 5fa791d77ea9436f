//! Payment repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use gatehouse_interfaces::{ConnectionProvider, Repository, StorageResult};
use gatehouse_types::{GroupedRow, Payment};

use crate::record;
use crate::sql;
use crate::table::TableRepository;

/// Repository for payment-related database operations
#[derive(Clone)]
pub struct PaymentRepository {
    provider: Arc<dyn ConnectionProvider>,
    base: TableRepository<Payment>,
}

impl PaymentRepository {
    /// Create a new payment repository
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            base: TableRepository::new(provider.clone()),
            provider,
        }
    }

    /// Generic CRUD surface for the payments table
    pub fn base(&self) -> &TableRepository<Payment> {
        &self.base
    }
}

#[async_trait]
impl Repository for PaymentRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl gatehouse_interfaces::PaymentRepository for PaymentRepository {
    async fn method_breakdown(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>> {
        let mut conditions = Vec::new();
        let mut params = Vec::new();
        sql::push_date_range(&mut conditions, &mut params, "date(paid_at)", start, end);

        let statement = format!(
            "SELECT method AS label, \
                    COUNT(*) AS count, \
                    COALESCE(SUM(amount), 0) AS amount \
             FROM payments{} \
             GROUP BY method \
             ORDER BY amount DESC",
            sql::where_clause(&conditions)
        );

        let rows = self.provider.fetch_all(&statement, &params).await?;
        record::from_rows(rows)
    }

    async fn find_by_order(&self, order_id: i32) -> StorageResult<Vec<Payment>> {
        let statement = format!(
            "SELECT {} FROM payments WHERE order_id = ? ORDER BY paid_at ASC",
            sql::select_list::<Payment>()
        );
        let rows = self.provider.fetch_all(&statement, &[json!(order_id)]).await?;
        record::from_rows(rows)
    }
}
