//! Scripted connection provider
//!
//! Queues canned responses and records every statement with its bound
//! parameters, so tests can assert the exact SQL a repository emits and
//! feed it the rows a real database would return. Responses are consumed
//! in call order regardless of the fetch method used.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use gatehouse_interfaces::{ConnectionProvider, StorageError, StorageResult};

/// One scripted provider response
#[derive(Debug, Clone)]
pub enum CannedResponse {
    Rows(Vec<Value>),
    Row(Value),
    Optional(Option<Value>),
    Affected(u64),
    Error(StorageError),
}

/// Recording provider for repository SQL tests
#[derive(Default)]
pub struct RecordingProvider {
    calls: Mutex<Vec<(String, Vec<Value>)>>,
    responses: Mutex<VecDeque<CannedResponse>>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a row-set response for the next fetch
    pub fn push_rows(&self, rows: Vec<Value>) {
        self.responses
            .lock()
            .expect("provider lock")
            .push_back(CannedResponse::Rows(rows));
    }

    /// Queue a single-row response
    pub fn push_row(&self, row: Value) {
        self.responses
            .lock()
            .expect("provider lock")
            .push_back(CannedResponse::Row(row));
    }

    /// Queue an optional-row response
    pub fn push_optional(&self, row: Option<Value>) {
        self.responses
            .lock()
            .expect("provider lock")
            .push_back(CannedResponse::Optional(row));
    }

    /// Queue a rows-affected response
    pub fn push_affected(&self, affected: u64) {
        self.responses
            .lock()
            .expect("provider lock")
            .push_back(CannedResponse::Affected(affected));
    }

    /// Queue a failure
    pub fn push_error(&self, error: StorageError) {
        self.responses
            .lock()
            .expect("provider lock")
            .push_back(CannedResponse::Error(error));
    }

    /// Every recorded statement with its parameters, in call order
    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().expect("provider lock").clone()
    }

    fn record(&self, query: &str, params: &[Value]) {
        self.calls
            .lock()
            .expect("provider lock")
            .push((query.to_string(), params.to_vec()));
    }

    fn next(&self, query: &str) -> StorageResult<CannedResponse> {
        self.responses
            .lock()
            .expect("provider lock")
            .pop_front()
            .ok_or_else(|| StorageError::Query(format!("no canned response for: {query}")))
    }
}

#[async_trait]
impl ConnectionProvider for RecordingProvider {
    async fn execute(&self, query: &str, params: &[Value]) -> StorageResult<u64> {
        self.record(query, params);
        match self.next(query)? {
            CannedResponse::Affected(affected) => Ok(affected),
            CannedResponse::Error(error) => Err(error),
            other => Err(StorageError::Query(format!(
                "expected affected-rows response, got {other:?}"
            ))),
        }
    }

    async fn fetch_all(&self, query: &str, params: &[Value]) -> StorageResult<Vec<Value>> {
        self.record(query, params);
        match self.next(query)? {
            CannedResponse::Rows(rows) => Ok(rows),
            CannedResponse::Error(error) => Err(error),
            other => Err(StorageError::Query(format!(
                "expected row-set response, got {other:?}"
            ))),
        }
    }

    async fn fetch_one(&self, query: &str, params: &[Value]) -> StorageResult<Value> {
        self.record(query, params);
        match self.next(query)? {
            CannedResponse::Row(row) => Ok(row),
            CannedResponse::Error(error) => Err(error),
            other => Err(StorageError::Query(format!(
                "expected single-row response, got {other:?}"
            ))),
        }
    }

    async fn fetch_optional(&self, query: &str, params: &[Value]) -> StorageResult<Option<Value>> {
        self.record(query, params);
        match self.next(query)? {
            CannedResponse::Optional(row) => Ok(row),
            CannedResponse::Error(error) => Err(error),
            other => Err(StorageError::Query(format!(
                "expected optional-row response, got {other:?}"
            ))),
        }
    }

    async fn ping(&self) -> StorageResult<bool> {
        Ok(true)
    }
}
