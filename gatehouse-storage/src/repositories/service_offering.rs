//! Service offering repository

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use gatehouse_interfaces::{ConnectionProvider, Repository, StorageResult};
use gatehouse_types::{GroupedRow, ServiceOffering};

use crate::record;
use crate::sql;
use crate::table::TableRepository;

/// Repository for venue service offerings
#[derive(Clone)]
pub struct ServiceOfferingRepository {
    provider: Arc<dyn ConnectionProvider>,
    base: TableRepository<ServiceOffering>,
}

impl ServiceOfferingRepository {
    /// Create a new service offering repository
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            base: TableRepository::new(provider.clone()),
            provider,
        }
    }

    /// Generic CRUD surface for the service_offerings table
    pub fn base(&self) -> &TableRepository<ServiceOffering> {
        &self.base
    }
}

#[async_trait]
impl Repository for ServiceOfferingRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl gatehouse_interfaces::ServiceOfferingRepository for ServiceOfferingRepository {
    async fn find_active(&self) -> StorageResult<Vec<ServiceOffering>> {
        let statement = format!(
            "SELECT {} FROM service_offerings WHERE is_active = 1 ORDER BY name ASC",
            sql::select_list::<ServiceOffering>()
        );
        let rows = self.provider.fetch_all(&statement, &[]).await?;
        record::from_rows(rows)
    }

    async fn sales_breakdown(&self) -> StorageResult<Vec<GroupedRow>> {
        let rows = self
            .provider
            .fetch_all(
                "SELECT name AS label, \
                        purchase_count AS count, \
                        price * purchase_count AS amount \
                 FROM service_offerings \
                 ORDER BY amount DESC",
                &[],
            )
            .await?;
        record::from_rows(rows)
    }

    async fn increment_purchases(&self, id: i32) -> StorageResult<bool> {
        let affected = self
            .provider
            .execute(
                "UPDATE service_offerings SET purchase_count = purchase_count + 1 WHERE id = ?",
                &[json!(id)],
            )
            .await?;
        Ok(affected == 1)
    }
}
