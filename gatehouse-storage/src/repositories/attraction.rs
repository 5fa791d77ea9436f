//! Attraction repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;

use gatehouse_interfaces::{ConnectionProvider, Repository, StorageResult};
use gatehouse_types::{Attraction, GroupedRow};

use crate::record;
use crate::sql;
use crate::table::TableRepository;

/// Repository for attraction-related database operations
#[derive(Clone)]
pub struct AttractionRepository {
    provider: Arc<dyn ConnectionProvider>,
    base: TableRepository<Attraction>,
}

impl AttractionRepository {
    /// Create a new attraction repository
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            base: TableRepository::new(provider.clone()),
            provider,
        }
    }

    /// Generic CRUD surface for the attractions table
    pub fn base(&self) -> &TableRepository<Attraction> {
        &self.base
    }
}

#[async_trait]
impl Repository for AttractionRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl gatehouse_interfaces::AttractionRepository for AttractionRepository {
    async fn find_active(&self) -> StorageResult<Vec<Attraction>> {
        let statement = format!(
            "SELECT {} FROM attractions WHERE is_active = 1 ORDER BY name ASC",
            sql::select_list::<Attraction>()
        );
        let rows = self.provider.fetch_all(&statement, &[]).await?;
        record::from_rows(rows)
    }

    async fn find_by_zone(&self, zone_id: i32) -> StorageResult<Vec<Attraction>> {
        let statement = format!(
            "SELECT {} FROM attractions WHERE zone_id = ? ORDER BY name ASC",
            sql::select_list::<Attraction>()
        );
        let rows = self.provider.fetch_all(&statement, &[json!(zone_id)]).await?;
        record::from_rows(rows)
    }

    async fn popularity(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>> {
        // Range conditions join-side so attractions without visits keep
        // their zero-count row.
        let mut join_conditions = vec![
            "t.attraction_id = a.id".to_string(),
            "t.status IN ('confirmed', 'used')".to_string(),
        ];
        let mut params = Vec::new();
        sql::push_date_range(
            &mut join_conditions,
            &mut params,
            "date(t.visit_at)",
            start,
            end,
        );

        let statement = format!(
            "SELECT a.name AS label, \
                    COUNT(t.id) AS count, \
                    COALESCE(SUM(t.price), 0) AS amount \
             FROM attractions a \
             LEFT JOIN tickets t ON {} \
             GROUP BY a.id, a.name \
             ORDER BY count DESC",
            join_conditions.join(" AND ")
        );

        let rows = self.provider.fetch_all(&statement, &params).await?;
        record::from_rows(rows)
    }

    async fn set_active(&self, id: i32, active: bool) -> StorageResult<bool> {
        let affected = self
            .provider
            .execute(
                "UPDATE attractions SET is_active = ? WHERE id = ?",
                &[json!(active), json!(id)],
            )
            .await?;
        Ok(affected == 1)
    }
}
