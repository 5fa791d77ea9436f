//! Order repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use tracing::debug;

use gatehouse_interfaces::{ConnectionProvider, Repository, StorageResult};
use gatehouse_types::{DailySalesRow, GroupedRow, Order, OrderStatus, SalesTotalsRow};

use crate::record;
use crate::sql;
use crate::table::TableRepository;

/// Repository for order-related database operations
#[derive(Clone)]
pub struct OrderRepository {
    provider: Arc<dyn ConnectionProvider>,
    base: TableRepository<Order>,
}

impl OrderRepository {
    /// Create a new order repository
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            base: TableRepository::new(provider.clone()),
            provider,
        }
    }

    /// Generic CRUD surface for the orders table
    pub fn base(&self) -> &TableRepository<Order> {
        &self.base
    }
}

#[async_trait]
impl Repository for OrderRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl gatehouse_interfaces::OrderRepository for OrderRepository {
    async fn sales_totals(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<SalesTotalsRow> {
        let mut conditions = vec!["status IN ('paid', 'completed')".to_string()];
        let mut params = Vec::new();
        sql::push_date_range(&mut conditions, &mut params, "date(created_at)", start, end);

        let statement = format!(
            "SELECT COUNT(*) AS order_count, \
                    COALESCE(SUM(ticket_count), 0) AS ticket_count, \
                    COALESCE(SUM(total_amount), 0) AS revenue \
             FROM orders{}",
            sql::where_clause(&conditions)
        );

        debug!(?start, ?end, "querying sales totals");
        let row = self.provider.fetch_one(&statement, &params).await?;
        record::from_row(row)
    }

    async fn daily_sales(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<DailySalesRow>> {
        let mut conditions = vec!["status IN ('paid', 'completed')".to_string()];
        let mut params = Vec::new();
        sql::push_date_range(&mut conditions, &mut params, "date(created_at)", start, end);

        let statement = format!(
            "SELECT date(created_at) AS day, \
                    COUNT(*) AS orders, \
                    COALESCE(SUM(ticket_count), 0) AS tickets, \
                    COALESCE(SUM(total_amount), 0) AS revenue \
             FROM orders{} \
             GROUP BY day \
             ORDER BY day ASC",
            sql::where_clause(&conditions)
        );

        let rows = self.provider.fetch_all(&statement, &params).await?;
        record::from_rows(rows)
    }

    async fn revenue_by_attraction(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>> {
        let mut conditions = vec!["o.status IN ('paid', 'completed')".to_string()];
        let mut params = Vec::new();
        sql::push_date_range(&mut conditions, &mut params, "date(o.created_at)", start, end);

        let statement = format!(
            "SELECT a.name AS label, \
                    COUNT(t.id) AS count, \
                    COALESCE(SUM(t.price), 0) AS amount \
             FROM tickets t \
             INNER JOIN orders o ON t.order_id = o.id \
             INNER JOIN attractions a ON t.attraction_id = a.id{} \
             GROUP BY a.id, a.name \
             ORDER BY amount DESC",
            sql::where_clause(&conditions)
        );

        let rows = self.provider.fetch_all(&statement, &params).await?;
        record::from_rows(rows)
    }

    async fn find_by_status(&self, status: OrderStatus) -> StorageResult<Vec<Order>> {
        let statement = format!(
            "SELECT {} FROM orders WHERE status = ? ORDER BY created_at DESC",
            sql::select_list::<Order>()
        );
        let rows = self
            .provider
            .fetch_all(&statement, &[json!(status.as_str())])
            .await?;
        record::from_rows(rows)
    }

    async fn find_by_client(&self, client_id: i32) -> StorageResult<Vec<Order>> {
        let statement = format!(
            "SELECT {} FROM orders WHERE client_id = ? ORDER BY created_at DESC",
            sql::select_list::<Order>()
        );
        let rows = self.provider.fetch_all(&statement, &[json!(client_id)]).await?;
        record::from_rows(rows)
    }
}
