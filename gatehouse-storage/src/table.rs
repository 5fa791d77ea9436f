//! Generic table repository
//!
//! One implementation of the full CRUD surface for every entity, driven
//! by the `Record` descriptor. Repositories hold no state beyond the
//! injected provider; primary-key assignment is delegated entirely to the
//! persistence layer via `INSERT ... RETURNING`.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use gatehouse_interfaces::{
    ConnectionProvider, CrudRepository, Repository, StorageError, StorageResult,
};

use crate::record::{self, Record};
use crate::sql;

/// Table-agnostic CRUD repository bound to one entity type
pub struct TableRepository<T: Record> {
    provider: Arc<dyn ConnectionProvider>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for TableRepository<T> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Record> TableRepository<T> {
    /// Create a repository over the given connection provider
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            provider,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Record> Repository for TableRepository<T> {
    async fn health_check(&self) -> StorageResult<()> {
        self.provider.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl<T: Record> CrudRepository<T> for TableRepository<T> {
    async fn find_all(&self) -> StorageResult<Vec<T>> {
        let statement = sql::select_all::<T>();
        debug!(table = T::TABLE, "select all");
        let rows = self.provider.fetch_all(&statement, &[]).await?;
        record::from_rows(rows)
    }

    async fn find_by_id(&self, id: i32) -> StorageResult<Option<T>> {
        let statement = sql::select_by_id::<T>();
        let row = self.provider.fetch_optional(&statement, &[json!(id)]).await?;
        row.map(record::from_row).transpose()
    }

    async fn create(&self, entity: T) -> StorageResult<T> {
        let statement = sql::insert::<T>();
        let params = record::write_params(&entity)?;
        debug!(table = T::TABLE, "insert");
        let returned = self.provider.fetch_one(&statement, &params).await?;

        let id = returned
            .get(T::PRIMARY_KEY)
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                StorageError::Serialization(format!(
                    "insert into {} did not return a {} value",
                    T::TABLE,
                    T::PRIMARY_KEY
                ))
            })?;

        Ok(entity.with_id(id as i32))
    }

    async fn update(&self, entity: &T) -> StorageResult<bool> {
        let statement = sql::update::<T>();
        let mut params = record::write_params(entity)?;
        params.push(json!(entity.id()));

        let affected = self.provider.execute(&statement, &params).await?;
        if affected == 0 {
            debug!(table = T::TABLE, id = entity.id(), "update matched no row");
        }
        Ok(affected == 1)
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let statement = sql::delete::<T>();
        let affected = self.provider.execute(&statement, &[json!(id)]).await?;
        if affected == 0 {
            debug!(table = T::TABLE, id, "delete matched no row");
        }
        Ok(affected == 1)
    }

    async fn find_page(&self, page: u32, per_page: u32) -> StorageResult<Vec<T>> {
        if page == 0 {
            return Err(StorageError::Validation(
                "page number is 1-based and must be greater than 0".to_string(),
            ));
        }
        if per_page == 0 {
            return Err(StorageError::Validation(
                "page size must be greater than 0".to_string(),
            ));
        }

        let statement = sql::select_page::<T>();
        let offset = u64::from(page - 1) * u64::from(per_page);
        let rows = self
            .provider
            .fetch_all(&statement, &[json!(per_page), json!(offset)])
            .await?;
        record::from_rows(rows)
    }

    async fn count(&self) -> StorageResult<u64> {
        let statement = sql::count::<T>();
        let row = self.provider.fetch_one(&statement, &[]).await?;
        row.get("count").and_then(Value::as_u64).ok_or_else(|| {
            StorageError::Serialization(format!("count for {} returned no count column", T::TABLE))
        })
    }
}
