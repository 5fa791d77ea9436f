//! Record descriptors and row mapping
//!
//! Each entity declares its table binding as a compile-time field
//! descriptor: table name, writable columns and primary-key accessors.
//! One generic repository serves every table from these descriptors; the
//! column lists exclude the primary key from insert/update write sets
//! while the key stays available for `WHERE` clauses. Column names equal
//! the serde field names, so rows map to entities through `serde_json`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use gatehouse_interfaces::{StorageError, StorageResult};

/// A persisted entity bound to a table
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Bound table name
    const TABLE: &'static str;

    /// Writable columns in declaration order, primary key excluded
    const COLUMNS: &'static [&'static str];

    /// Primary key column
    const PRIMARY_KEY: &'static str = "id";

    /// Current primary key value (0 before the first insert)
    fn id(&self) -> i32;

    /// The same entity with the repository-assigned key populated
    fn with_id(self, id: i32) -> Self;
}

/// Serialize an entity into a column-keyed row object
pub(crate) fn to_row<T: Record>(entity: &T) -> StorageResult<Map<String, Value>> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(map),
        other => Err(StorageError::Serialization(format!(
            "entity for table {} serialized to non-object value: {}",
            T::TABLE,
            other
        ))),
    }
}

/// Bind parameters for the writable columns, in descriptor order
pub(crate) fn write_params<T: Record>(entity: &T) -> StorageResult<Vec<Value>> {
    let mut row = to_row(entity)?;
    Ok(T::COLUMNS
        .iter()
        .map(|column| row.remove(*column).unwrap_or(Value::Null))
        .collect())
}

/// Deserialize one provider row into an entity
pub(crate) fn from_row<T: DeserializeOwned>(row: Value) -> StorageResult<T> {
    serde_json::from_value(row).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Deserialize a row set
pub(crate) fn from_rows<T: DeserializeOwned>(rows: Vec<Value>) -> StorageResult<Vec<T>> {
    rows.into_iter().map(from_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_types::Zone;

    use crate::schema::tests_support::zone_fixture;

    #[test]
    fn test_write_params_follow_descriptor_order() {
        let zone = zone_fixture();
        let params = write_params(&zone).unwrap();

        assert_eq!(params.len(), Zone::COLUMNS.len());
        assert_eq!(params[0], Value::String("North Gate".into()));
        assert_eq!(params[1], serde_json::json!(250));
        assert_eq!(params[2], Value::Bool(true));
    }

    #[test]
    fn test_row_round_trip() {
        let zone = zone_fixture();
        let row = Value::Object(to_row(&zone).unwrap());
        let back: Zone = from_row(row).unwrap();
        assert_eq!(back, zone);
    }
}
