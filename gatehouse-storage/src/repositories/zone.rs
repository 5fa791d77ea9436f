//! Zone repository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use gatehouse_interfaces::{ConnectionProvider, Repository, StorageResult};
use gatehouse_types::{GroupedRow, Zone};

use crate::record;
use crate::sql;
use crate::table::TableRepository;

/// Repository for zone-related database operations
#[derive(Clone)]
pub struct ZoneRepository {
    provider: Arc<dyn ConnectionProvider>,
    base: TableRepository<Zone>,
}

impl ZoneRepository {
    /// Create a new zone repository
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            base: TableRepository::new(provider.clone()),
            provider,
        }
    }

    /// Generic CRUD surface for the zones table
    pub fn base(&self) -> &TableRepository<Zone> {
        &self.base
    }
}

#[async_trait]
impl Repository for ZoneRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl gatehouse_interfaces::ZoneRepository for ZoneRepository {
    async fn find_open(&self) -> StorageResult<Vec<Zone>> {
        let statement = format!(
            "SELECT {} FROM zones WHERE is_open = 1 ORDER BY name ASC",
            sql::select_list::<Zone>()
        );
        let rows = self.provider.fetch_all(&statement, &[]).await?;
        record::from_rows(rows)
    }

    async fn utilization(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StorageResult<Vec<GroupedRow>> {
        // Range conditions join-side so zones without visits keep their
        // zero-count row.
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
            "SELECT z.name AS label, \
                    COUNT(t.id) AS count, \
                    COALESCE(SUM(t.price), 0) AS amount \
             FROM zones z \
             LEFT JOIN attractions a ON a.zone_id = z.id \
             LEFT JOIN tickets t ON {} \
             GROUP BY z.id, z.name \
             ORDER BY count DESC",
            join_conditions.join(" AND ")
        );

        let rows = self.provider.fetch_all(&statement, &params).await?;
        record::from_rows(rows)
    }
}
