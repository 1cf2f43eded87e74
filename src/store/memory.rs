//! # In-Memory Order Store
//!
//! Vector of records plus a key index. Built once, then only read.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::backend::OrderStore;
use super::errors::{StoreError, StoreResult};
use super::record::OrderRecord;

/// Fixed in-memory dataset keyed by order number
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    records: Vec<OrderRecord>,
    index: HashMap<String, usize>,
}

impl InMemoryOrderStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, keeping their order.
    ///
    /// Fails on the first repeated order number.
    pub fn from_records<I>(records: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = OrderRecord>,
    {
        let mut store = Self::new();
        for record in records {
            if store.index.contains_key(&record.order_number) {
                return Err(StoreError::DuplicateOrder(record.order_number));
            }
            store
                .index
                .insert(record.order_number.clone(), store.records.len());
            store.records.push(record);
        }
        Ok(store)
    }

    /// Parse a JSON array of records
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let records: Vec<OrderRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a JSON array of records from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }
}

impl OrderStore for InMemoryOrderStore {
    fn get(&self, order_number: &str) -> Option<&OrderRecord> {
        self.index.get(order_number).map(|&i| &self.records[i])
    }

    fn list_all(&self) -> Vec<&OrderRecord> {
        self.records.iter().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(number: &str) -> OrderRecord {
        OrderRecord::new(
            number,
            "Processing",
            "Test Customer",
            1000,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_get_known_and_unknown() {
        let store = InMemoryOrderStore::from_records(vec![record("A1"), record("B2")]).unwrap();

        assert_eq!(store.get("A1").unwrap().order_number, "A1");
        assert!(store.get("C3").is_none());
        // Keys are exact: no case folding or trimming
        assert!(store.get("a1").is_none());
        assert!(store.get(" A1").is_none());
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let store =
            InMemoryOrderStore::from_records(vec![record("Z9"), record("A1"), record("M5")])
                .unwrap();

        let numbers: Vec<_> = store
            .list_all()
            .into_iter()
            .map(|r| r.order_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["Z9", "A1", "M5"]);

        // Restartable: a second pass sees the same sequence
        assert_eq!(store.list_all().len(), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_order_rejected() {
        let result = InMemoryOrderStore::from_records(vec![record("A1"), record("A1")]);
        assert!(matches!(result, Err(StoreError::DuplicateOrder(n)) if n == "A1"));
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryOrderStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let store = InMemoryOrderStore::from_json_str(
            r#"[{"ordernumber":"X1","status":"Shipped","customer":"C","total":5,"orderdate":"2025-03-01","trackingnumber":"TRK1"}]"#,
        )
        .unwrap();

        let found = store.get("X1").unwrap();
        assert_eq!(found.tracking_number.as_deref(), Some("TRK1"));
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        let result = InMemoryOrderStore::from_json_str("{not json");
        assert!(matches!(result, Err(StoreError::InvalidJson(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = InMemoryOrderStore::from_json_file("/nonexistent/orders.json");
        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
