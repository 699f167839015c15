use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{Query, RemoteError, RemoteStore, Table};

const REST_PREFIX: &str = "/rest/v1";

/// HTTP client for the backend's PostgREST surface.
///
/// Authenticates with the project's public anon key; row-level security on the
/// server decides what the key may write.
pub struct RestStore {
    base_url: String,
    anon_key: String,
    http: reqwest::Client,
}

/// Error body returned by PostgREST on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            http: reqwest::Client::new(),
        }
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}{}/{}", self.base_url, REST_PREFIX, table.name())
    }

    /// Build a select URL: `?select=*&order=col.desc&col=eq.value`.
    fn select_url(&self, table: Table, query: &Query) -> String {
        let mut url = format!("{}?select=*", self.table_url(table));

        if let Some(order) = &query.order {
            let direction = if order.descending { "desc" } else { "asc" };
            url.push_str(&format!(
                "&order={}.{}",
                urlencoding::encode(&order.column),
                direction
            ));
        }

        for (column, value) in &query.filters {
            url.push('&');
            url.push_str(&urlencoding::encode(column));
            url.push_str("=eq.");
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    fn row_url(&self, table: Table, id: &str) -> String {
        format!("{}?id=eq.{}", self.table_url(table), urlencoding::encode(id))
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }

    /// Turn a non-2xx response into `RemoteError::Status`, preferring the server's message.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        Err(RemoteError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl RemoteStore for RestStore {
    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>, RemoteError> {
        let url = self.select_url(table, query);
        debug!("GET {}", url);
        let resp = self.authorized(self.http.get(&url)).send().await?;
        let resp = Self::check(resp).await?;
        resp.json::<Vec<Value>>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn insert(&self, table: Table, row: Value) -> Result<(), RemoteError> {
        debug!("INSERT into {}", table.name());
        let resp = self
            .authorized(self.http.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(&Value::Array(vec![row]))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn update(&self, table: Table, id: &str, patch: Value) -> Result<(), RemoteError> {
        debug!("UPDATE {} id={}", table.name(), id);
        let resp = self
            .authorized(self.http.patch(self.row_url(table, id)))
            .header("Prefer", "return=minimal")
            .json(&patch)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteError> {
        debug!("DELETE {} id={}", table.name(), id);
        let resp = self
            .authorized(self.http.delete(self.row_url(table, id)))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn upsert(&self, table: Table, row: Value) -> Result<(), RemoteError> {
        debug!("UPSERT into {}", table.name());
        let resp = self
            .authorized(self.http.post(self.table_url(table)))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&Value::Array(vec![row]))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RestStore {
        RestStore::new("https://project.supabase.co/", "anon")
    }

    #[test]
    fn select_url_plain() {
        let url = store().select_url(Table::Banners, &Query::all());
        assert_eq!(url, "https://project.supabase.co/rest/v1/banners?select=*");
    }

    #[test]
    fn select_url_with_order_and_filter() {
        let url = store().select_url(
            Table::SiteSettings,
            &Query::all().newest_first().eq("key", "author_photo"),
        );
        assert_eq!(
            url,
            "https://project.supabase.co/rest/v1/site_settings?select=*&order=created_at.desc&key=eq.author_photo"
        );
    }

    #[test]
    fn filter_values_are_encoded() {
        let url = store().select_url(Table::Books, &Query::all().eq("title", "a b&c"));
        assert!(url.ends_with("&title=eq.a%20b%26c"));
    }

    #[test]
    fn row_url_targets_id() {
        assert_eq!(
            store().row_url(Table::Releases, "17"),
            "https://project.supabase.co/rest/v1/releases?id=eq.17"
        );
    }

    #[test]
    fn error_message_prefers_server_message() {
        assert_eq!(
            error_message(r#"{"code":"42501","message":"permission denied"}"#),
            "permission denied"
        );
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }
}
