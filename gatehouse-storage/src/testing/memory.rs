//! In-memory connection provider
//!
//! Executes the statement shapes produced by the `sql` module against
//! JSON row tables. Statements outside that fixed set fail with a query
//! error rather than silently returning nothing, so a repository that
//! drifts from the builder is caught immediately. Primary keys are
//! assigned from a per-table counter, mirroring the auto-increment
//! contract of the real persistence layer.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Map, Value};

use gatehouse_interfaces::{ConnectionProvider, StorageError, StorageResult};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<Map<String, Value>>,
}

/// JSON-table backed provider for CRUD tests
#[derive(Default)]
pub struct InMemoryProvider {
    tables: Mutex<HashMap<String, Table>>,
    unique: Vec<(String, String)>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enforce a unique column on inserts, for constraint-propagation tests
    pub fn with_unique(mut self, table: &str, column: &str) -> Self {
        self.unique.push((table.to_string(), column.to_string()));
        self
    }

    fn unsupported(statement: &str) -> StorageError {
        StorageError::Query(format!(
            "statement not supported by in-memory provider: {statement}"
        ))
    }
}

/// Whitespace-delimited token following `keyword`
fn token_after<'a>(statement: &'a str, keyword: &str) -> Option<&'a str> {
    let start = statement.find(keyword)? + keyword.len();
    statement[start..].split_whitespace().next()
}

/// Comma-separated identifier list between the first pair of parentheses
fn parenthesized_columns(statement: &str) -> Option<Vec<&str>> {
    let open = statement.find('(')?;
    let close = statement[open..].find(')')? + open;
    Some(statement[open + 1..close].split(", ").collect())
}

#[async_trait]
impl ConnectionProvider for InMemoryProvider {
    async fn execute(&self, query: &str, params: &[Value]) -> StorageResult<u64> {
        let mut tables = self.tables.lock().expect("provider lock");

        if let Some(table_name) = query.strip_prefix("UPDATE ").and_then(|rest| {
            query.contains(" WHERE id = ?").then(|| rest.split_whitespace().next()).flatten()
        }) {
            let set_start = query.find(" SET ").ok_or_else(|| Self::unsupported(query))? + 5;
            let set_end = query.find(" WHERE ").ok_or_else(|| Self::unsupported(query))?;
            let columns: Vec<&str> = query[set_start..set_end]
                .split(", ")
                .map(|assignment| assignment.trim_end_matches(" = ?"))
                .collect();
            // Only the builder's positional form: one param per column plus the key
            if columns.len() + 1 != params.len() || columns.iter().any(|c| c.contains(' ')) {
                return Err(Self::unsupported(query));
            }
            let id = params.last().cloned().ok_or_else(|| Self::unsupported(query))?;

            let table = tables.entry(table_name.to_string()).or_default();
            let mut affected = 0;
            for row in table.rows.iter_mut() {
                if row.get("id") == Some(&id) {
                    for (column, value) in columns.iter().zip(params.iter()) {
                        row.insert((*column).to_string(), value.clone());
                    }
                    affected += 1;
                }
            }
            return Ok(affected);
        }

        if query.starts_with("DELETE FROM ") && query.ends_with(" WHERE id = ?") {
            let table_name = token_after(query, "DELETE FROM ").ok_or_else(|| Self::unsupported(query))?;
            let id = params.first().ok_or_else(|| Self::unsupported(query))?;

            let table = tables.entry(table_name.to_string()).or_default();
            let before = table.rows.len();
            table.rows.retain(|row| row.get("id") != Some(id));
            return Ok((before - table.rows.len()) as u64);
        }

        Err(Self::unsupported(query))
    }

    async fn fetch_all(&self, query: &str, params: &[Value]) -> StorageResult<Vec<Value>> {
        let mut tables = self.tables.lock().expect("provider lock");

        if !query.starts_with("SELECT ") {
            return Err(Self::unsupported(query));
        }
        let table_name = token_after(query, " FROM ").ok_or_else(|| Self::unsupported(query))?;
        let table = tables.entry(table_name.to_string()).or_default();

        if query.ends_with("LIMIT ? OFFSET ?") {
            let limit = params
                .first()
                .and_then(Value::as_u64)
                .ok_or_else(|| Self::unsupported(query))?;
            let offset = params
                .get(1)
                .and_then(Value::as_u64)
                .ok_or_else(|| Self::unsupported(query))?;
            return Ok(table
                .rows
                .iter()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .map(Value::Object)
                .collect());
        }

        if query.contains(" WHERE ") {
            return Err(Self::unsupported(query));
        }
        Ok(table.rows.iter().cloned().map(Value::Object).collect())
    }

    async fn fetch_one(&self, query: &str, params: &[Value]) -> StorageResult<Value> {
        let mut tables = self.tables.lock().expect("provider lock");

        if query.starts_with("INSERT INTO ") && query.ends_with(" RETURNING id") {
            let table_name = token_after(query, "INSERT INTO ").ok_or_else(|| Self::unsupported(query))?;
            let columns = parenthesized_columns(query).ok_or_else(|| Self::unsupported(query))?;
            if columns.len() != params.len() {
                return Err(Self::unsupported(query));
            }

            for (unique_table, unique_column) in &self.unique {
                if unique_table != table_name {
                    continue;
                }
                let position = columns.iter().position(|c| *c == unique_column.as_str());
                if let Some(position) = position {
                    let table = tables.entry(table_name.to_string()).or_default();
                    let exists = table
                        .rows
                        .iter()
                        .any(|row| row.get(unique_column) == Some(&params[position]));
                    if exists {
                        return Err(StorageError::Constraint(format!(
                            "UNIQUE constraint failed: {table_name}.{unique_column}"
                        )));
                    }
                }
            }

            let table = tables.entry(table_name.to_string()).or_default();
            table.next_id += 1;
            let id = table.next_id;

            let mut row = Map::new();
            row.insert("id".to_string(), json!(id));
            for (column, value) in columns.iter().zip(params.iter()) {
                row.insert((*column).to_string(), value.clone());
            }
            table.rows.push(row);
            return Ok(json!({ "id": id }));
        }

        if query.starts_with("SELECT COUNT(*) AS count FROM ") {
            let table_name = token_after(query, " FROM ").ok_or_else(|| Self::unsupported(query))?;
            let table = tables.entry(table_name.to_string()).or_default();
            return Ok(json!({ "count": table.rows.len() }));
        }

        Err(Self::unsupported(query))
    }

    async fn fetch_optional(&self, query: &str, params: &[Value]) -> StorageResult<Option<Value>> {
        let mut tables = self.tables.lock().expect("provider lock");

        if query.starts_with("SELECT ") && query.ends_with(" WHERE id = ?") {
            let table_name = token_after(query, " FROM ").ok_or_else(|| Self::unsupported(query))?;
            let id = params.first().ok_or_else(|| Self::unsupported(query))?;
            let table = tables.entry(table_name.to_string()).or_default();
            return Ok(table
                .rows
                .iter()
                .find(|row| row.get("id") == Some(id))
                .cloned()
                .map(Value::Object));
        }

        Err(Self::unsupported(query))
    }

    async fn ping(&self) -> StorageResult<bool> {
        Ok(true)
    }
}
