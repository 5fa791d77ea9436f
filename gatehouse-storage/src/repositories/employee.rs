//! Employee repository

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use gatehouse_interfaces::{ConnectionProvider, Repository, StorageResult};
use gatehouse_types::{Employee, EmployeeRole};

use crate::record;
use crate::sql;
use crate::table::TableRepository;

/// Repository for employee-related database operations
#[derive(Clone)]
pub struct EmployeeRepository {
    provider: Arc<dyn ConnectionProvider>,
    base: TableRepository<Employee>,
}

impl EmployeeRepository {
    /// Create a new employee repository
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            base: TableRepository::new(provider.clone()),
            provider,
        }
    }

    /// Generic CRUD surface for the employees table
    pub fn base(&self) -> &TableRepository<Employee> {
        &self.base
    }
}

#[async_trait]
impl Repository for EmployeeRepository {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl gatehouse_interfaces::EmployeeRepository for EmployeeRepository {
    async fn find_active(&self) -> StorageResult<Vec<Employee>> {
        let statement = format!(
            "SELECT {} FROM employees WHERE is_active = 1 ORDER BY full_name ASC",
            sql::select_list::<Employee>()
        );
        let rows = self.provider.fetch_all(&statement, &[]).await?;
        record::from_rows(rows)
    }

    async fn find_by_role(&self, role: EmployeeRole) -> StorageResult<Vec<Employee>> {
        let statement = format!(
            "SELECT {} FROM employees \
             WHERE role = ? AND is_active = 1 \
             ORDER BY full_name ASC",
            sql::select_list::<Employee>()
        );
        let rows = self
            .provider
            .fetch_all(&statement, &[json!(role.as_str())])
            .await?;
        record::from_rows(rows)
    }
}
