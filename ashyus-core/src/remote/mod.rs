//! Remote content store: the hosted relational backend the site reads and writes.
//!
//! Four tables back the site:
//! ```text
//! books          -- catalog, newest first by created_at
//! banners        -- sponsor images, left/right sidebar
//! releases       -- upcoming book announcements
//! site_settings  -- key/value pairs (author_photo)
//! ```
//!
//! Rows travel as JSON objects with snake_case columns; mapping to typed
//! structs lives in `crate::rows`. The trait is async and mockable for testing.

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;
use serde_json::Value;

/// Backend tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Books,
    Banners,
    Releases,
    SiteSettings,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Books => "books",
            Table::Banners => "banners",
            Table::Releases => "releases",
            Table::SiteSettings => "site_settings",
        }
    }
}

/// Column ordering for a select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

/// Select parameters: equality filters plus an optional ordering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub order: Option<Order>,
    pub filters: Vec<(String, String)>,
}

impl Query {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn newest_first(mut self) -> Self {
        self.order = Some(Order {
            column: "created_at".to_string(),
            descending: true,
        });
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }
}

/// Error type for remote store operations.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response format: {0}")]
    Decode(String),
}

/// `Send + Sync` on native targets, nothing on wasm where the HTTP futures are `!Send`.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> MaybeSendSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSendSync {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSendSync for T {}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait RemoteStore: MaybeSendSync {
    /// Fetch rows matching `query`.
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, RemoteError>;

    /// Insert a single row.
    async fn insert(&self, table: Table, row: Value) -> Result<(), RemoteError>;

    /// Patch the row whose `id` column equals `id` with the columns in `patch`.
    async fn update(&self, table: Table, id: &str, patch: Value) -> Result<(), RemoteError>;

    /// Delete the row whose `id` column equals `id`.
    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteError>;

    /// Insert, or merge into the existing row with the same primary key.
    async fn upsert(&self, table: Table, row: Value) -> Result<(), RemoteError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_builder_collects_filters_and_order() {
        let q = Query::all().newest_first().eq("key", "author_photo");
        assert_eq!(
            q.order,
            Some(Order {
                column: "created_at".into(),
                descending: true
            })
        );
        assert_eq!(q.filters, vec![("key".into(), "author_photo".into())]);
    }

    #[test]
    fn table_names_match_schema() {
        assert_eq!(Table::Books.name(), "books");
        assert_eq!(Table::SiteSettings.name(), "site_settings");
    }
}
