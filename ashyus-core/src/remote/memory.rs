use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Query, RemoteError, RemoteStore, Table};

/// In-process store with the same query semantics as the REST backend.
///
/// Rows live only as long as the store. `failing()` builds a store whose every
/// call errors, for exercising the sync layer's failure paths.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<Table, Vec<Value>>>,
    fail_with: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            tables: Mutex::default(),
            fail_with: Some(message.into()),
        }
    }

    /// Seed a table with rows (builder style).
    pub fn with_rows(self, table: Table, rows: Vec<Value>) -> Self {
        self.tables().insert(table, rows);
        self
    }

    /// Current contents of a table, in insertion order.
    pub fn rows(&self, table: Table) -> Vec<Value> {
        self.tables().get(&table).cloned().unwrap_or_default()
    }

    fn tables(&self) -> MutexGuard<'_, HashMap<Table, Vec<Value>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), RemoteError> {
        match &self.fail_with {
            Some(message) => Err(RemoteError::Status {
                status: 503,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Column value as comparable text (strings unquoted, everything else as JSON)
fn column_text(row: &Value, column: &str) -> Option<String> {
    match row.get(column)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn primary_key(table: Table) -> &'static str {
    match table {
        Table::SiteSettings => "key",
        _ => "id",
    }
}

fn merge(target: &mut Value, patch: &Value) {
    if let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) {
        for (k, v) in patch {
            target.insert(k.clone(), v.clone());
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RemoteStore for MemoryStore {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, RemoteError> {
        self.check()?;
        let mut rows: Vec<Value> = self
            .rows(table)
            .into_iter()
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|(col, val)| column_text(row, col).as_deref() == Some(val.as_str()))
            })
            .collect();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = column_text(a, &order.column).cmp(&column_text(b, &order.column));
                if order.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }

        Ok(rows)
    }

    async fn insert(&self, table: Table, row: Value) -> Result<(), RemoteError> {
        self.check()?;
        self.tables().entry(table).or_default().push(row);
        Ok(())
    }

    async fn update(&self, table: Table, id: &str, patch: Value) -> Result<(), RemoteError> {
        self.check()?;
        let mut tables = self.tables();
        if let Some(row) = tables
            .entry(table)
            .or_default()
            .iter_mut()
            .find(|row| column_text(row, "id").as_deref() == Some(id))
        {
            merge(row, &patch);
        }
        Ok(())
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteError> {
        self.check()?;
        self.tables()
            .entry(table)
            .or_default()
            .retain(|row| column_text(row, "id").as_deref() != Some(id));
        Ok(())
    }

    async fn upsert(&self, table: Table, row: Value) -> Result<(), RemoteError> {
        self.check()?;
        let key = primary_key(table);
        let key_value = column_text(&row, key);
        let mut tables = self.tables();
        let rows = tables.entry(table).or_default();

        match rows
            .iter_mut()
            .find(|existing| key_value.is_some() && column_text(existing, key) == key_value)
        {
            Some(existing) => merge(existing, &row),
            None => rows.push(row),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn select_filters_and_orders() {
        let store = MemoryStore::new().with_rows(
            Table::Books,
            vec![
                json!({"id": "1", "created_at": "2024-01-01T00:00:00Z"}),
                json!({"id": "2", "created_at": "2024-05-01T00:00:00Z"}),
                json!({"id": "3", "created_at": "2023-05-01T00:00:00Z"}),
            ],
        );

        let rows = store
            .select(Table::Books, &Query::all().newest_first())
            .await
            .unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);

        let rows = store
            .select(Table::Books, &Query::all().eq("id", "3"))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn update_merges_and_delete_removes() {
        let store = MemoryStore::new();
        store
            .insert(Table::Books, json!({"id": "1", "title": "A", "cover_url": "x"}))
            .await
            .unwrap();
        store
            .update(Table::Books, "1", json!({"cover_url": "y"}))
            .await
            .unwrap();
        assert_eq!(
            store.rows(Table::Books)[0],
            json!({"id": "1", "title": "A", "cover_url": "y"})
        );

        store.delete(Table::Books, "1").await.unwrap();
        assert!(store.rows(Table::Books).is_empty());
    }

    #[tokio::test]
    async fn upsert_settings_by_key() {
        let store = MemoryStore::new();
        store
            .upsert(Table::SiteSettings, json!({"key": "author_photo", "value": "a"}))
            .await
            .unwrap();
        store
            .upsert(Table::SiteSettings, json!({"key": "author_photo", "value": "b"}))
            .await
            .unwrap();
        assert_eq!(
            store.rows(Table::SiteSettings),
            vec![json!({"key": "author_photo", "value": "b"})]
        );
    }

    #[tokio::test]
    async fn failing_store_errors_everywhere() {
        let store = MemoryStore::failing("down");
        assert!(store.select(Table::Books, &Query::all()).await.is_err());
        assert!(store.insert(Table::Books, json!({})).await.is_err());
        assert!(store.delete(Table::Books, "1").await.is_err());
    }
}
