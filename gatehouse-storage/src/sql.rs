//! Statement construction for the generic repository
//!
//! Seven fixed statement shapes cover the whole generic surface; the
//! specialized repositories write their own SQL and only share the
//! optional date-range clause helper. Placeholders are positional `?`,
//! bound in the order the builder emits them.

use chrono::NaiveDate;
use serde_json::Value;

use crate::record::Record;

/// Select list for an entity: primary key first, then the writable columns
pub fn select_list<T: Record>() -> String {
    let mut columns = Vec::with_capacity(T::COLUMNS.len() + 1);
    columns.push(T::PRIMARY_KEY);
    columns.extend_from_slice(T::COLUMNS);
    columns.join(", ")
}

/// `SELECT ... FROM table`
pub fn select_all<T: Record>() -> String {
    format!("SELECT {} FROM {}", select_list::<T>(), T::TABLE)
}

/// `SELECT ... FROM table WHERE id = ?`
pub fn select_by_id<T: Record>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_list::<T>(),
        T::TABLE,
        T::PRIMARY_KEY
    )
}

/// `INSERT INTO table (...) VALUES (...) RETURNING id`
///
/// The write set lists every writable column and never the primary key;
/// key assignment is delegated to the persistence layer.
pub fn insert<T: Record>() -> String {
    let placeholders = vec!["?"; T::COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders,
        T::PRIMARY_KEY
    )
}

/// `UPDATE table SET c = ?, ... WHERE id = ?`
pub fn update<T: Record>() -> String {
    let assignments = T::COLUMNS
        .iter()
        .map(|column| format!("{column} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE {} = ?",
        T::TABLE,
        assignments,
        T::PRIMARY_KEY
    )
}

/// `DELETE FROM table WHERE id = ?`
pub fn delete<T: Record>() -> String {
    format!("DELETE FROM {} WHERE {} = ?", T::TABLE, T::PRIMARY_KEY)
}

/// `SELECT ... FROM table ORDER BY id LIMIT ? OFFSET ?`
pub fn select_page<T: Record>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {} LIMIT ? OFFSET ?",
        select_list::<T>(),
        T::TABLE,
        T::PRIMARY_KEY
    )
}

/// `SELECT COUNT(*) AS count FROM table`
pub fn count<T: Record>() -> String {
    format!("SELECT COUNT(*) AS count FROM {}", T::TABLE)
}

/// Append inclusive date-range conditions when bounds are supplied.
///
/// `expr` is a day-valued SQL expression, e.g. `date(o.created_at)`.
/// Absent bounds add nothing, so the caller's query degrades to the
/// unfiltered aggregate.
pub fn push_date_range(
    conditions: &mut Vec<String>,
    params: &mut Vec<Value>,
    expr: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) {
    if let Some(start) = start {
        conditions.push(format!("{expr} >= ?"));
        params.push(Value::String(start.to_string()));
    }
    if let Some(end) = end {
        conditions.push(format!("{expr} <= ?"));
        params.push(Value::String(end.to_string()));
    }
}

/// Join accumulated conditions into a `WHERE` clause, empty when none
pub fn where_clause(conditions: &[String]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    }
}
