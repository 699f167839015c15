//! Wire rows for the backend tables and their mapping to content types.
//!
//! Columns are snake_case; every text column may be missing or null in older
//! rows, so decoding is lenient and falls back to empty values.

use ashyus_common::{Banner, BannerPosition, Book, Release};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::sync::BookPatch;

/// Settings key holding the author photo URL
pub const AUTHOR_PHOTO_KEY: &str = "author_photo";

/// IDs are text, but rows created by hand in the dashboard may carry numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// Null and missing text columns both decode as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timestamp(value: Option<&str>) -> DateTime<Utc> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookRow {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub books2read_url: Option<String>,
    #[serde(default)]
    pub amazon_url: Option<String>,
    #[serde(default)]
    pub amazon_ebook_url: Option<String>,
    #[serde(default)]
    pub draft_book_url: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    #[serde(default)]
    pub short_synopsis: Option<String>,
    #[serde(default)]
    pub full_synopsis: Option<String>,
    #[serde(default)]
    pub first_chapter_markdown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl BookRow {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            books2read_url: Some(book.books2read_url.clone()),
            amazon_url: book.amazon_url.clone(),
            amazon_ebook_url: book.amazon_ebook_url.clone(),
            draft_book_url: book.draft_book_url.clone(),
            cover_url: Some(book.cover_url.clone()),
            short_synopsis: Some(book.short_synopsis.clone()),
            full_synopsis: Some(book.full_synopsis.clone()),
            first_chapter_markdown: Some(book.first_chapter_markdown.clone()),
            created_at: Some(book.created_at.to_rfc3339()),
        }
    }

    pub fn into_book(self) -> Book {
        Book {
            created_at: parse_timestamp(self.created_at.as_deref()),
            id: self.id,
            title: self.title,
            books2read_url: self.books2read_url.unwrap_or_default(),
            amazon_url: non_empty(self.amazon_url),
            amazon_ebook_url: non_empty(self.amazon_ebook_url),
            draft_book_url: non_empty(self.draft_book_url),
            cover_url: self.cover_url.unwrap_or_default(),
            short_synopsis: self.short_synopsis.unwrap_or_default(),
            full_synopsis: self.full_synopsis.unwrap_or_default(),
            first_chapter_markdown: self.first_chapter_markdown.unwrap_or_default(),
        }
    }
}

/// Changed columns only; `Some(None)` clears an optional link.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BookPatchRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books2read_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_ebook_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft_book_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_synopsis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_chapter_markdown: Option<String>,
}

impl From<&BookPatch> for BookPatchRow {
    fn from(patch: &BookPatch) -> Self {
        Self {
            title: patch.title.clone(),
            books2read_url: patch.books2read_url.clone(),
            amazon_url: patch.amazon_url.clone(),
            amazon_ebook_url: patch.amazon_ebook_url.clone(),
            draft_book_url: patch.draft_book_url.clone(),
            cover_url: patch.cover_url.clone(),
            short_synopsis: patch.short_synopsis.clone(),
            full_synopsis: patch.full_synopsis.clone(),
            first_chapter_markdown: patch.first_chapter_markdown.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BannerRow {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl BannerRow {
    pub fn from_banner(banner: &Banner) -> Self {
        Self {
            id: banner.id.clone(),
            image_url: banner.image_url.clone(),
            link_url: banner.link_url.clone(),
            position: banner.position.as_str().to_string(),
            created_at: Some(banner.created_at.to_rfc3339()),
        }
    }

    /// None when the position column holds something other than left/right.
    pub fn into_banner(self) -> Option<Banner> {
        let position = match self.position.parse::<BannerPosition>() {
            Ok(p) => p,
            Err(e) => {
                warn!("Skipping banner {}: {}", self.id, e);
                return None;
            }
        };
        Some(Banner {
            created_at: parse_timestamp(self.created_at.as_deref()),
            id: self.id,
            image_url: self.image_url,
            link_url: self.link_url,
            position,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseRow {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    /// Free-text announcement date
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_text: String,
}

impl ReleaseRow {
    pub fn from_release(release: &Release) -> Self {
        Self {
            id: release.id.clone(),
            title: release.title.clone(),
            description: release.description.clone(),
            image_url: release.image_url.clone(),
            date_text: release.date.clone(),
        }
    }

    pub fn into_release(self) -> Release {
        Release {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            date: self.date_text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingRow {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Decode a list of rows, failing on the first malformed one.
pub fn decode_rows<T: serde::de::DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, String> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| e.to_string()))
        .collect()
}

/// Encode a row struct as a JSON object.
pub fn encode_row<T: Serialize>(row: &T) -> Value {
    serde_json::to_value(row).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn book_row_decodes_with_missing_columns() {
        let row: BookRow = serde_json::from_value(json!({
            "id": 1712345678901u64,
            "title": "Entre a Razão E a Runa",
            "books2read_url": "https://books2read.com/runa",
            "amazon_url": "",
            "created_at": "2024-04-05T12:00:00.123456+00:00"
        }))
        .unwrap();

        let book = row.into_book();
        assert_eq!(book.id, "1712345678901");
        assert_eq!(book.amazon_url, None);
        assert_eq!(book.cover_url, "");
        assert_eq!(book.created_at.to_rfc3339(), "2024-04-05T12:00:00.123456+00:00");
    }

    #[test]
    fn book_row_keeps_snake_case_columns() {
        let book = BookRow {
            id: "1".into(),
            title: "T".into(),
            books2read_url: Some("b2r".into()),
            amazon_url: None,
            amazon_ebook_url: Some("kindle".into()),
            draft_book_url: None,
            cover_url: Some("cover".into()),
            short_synopsis: Some("s".into()),
            full_synopsis: Some("f".into()),
            first_chapter_markdown: Some("c".into()),
            created_at: None,
        };
        let value = encode_row(&book);
        assert_eq!(value["books2read_url"], "b2r");
        assert_eq!(value["amazon_ebook_url"], "kindle");
        assert_eq!(value["first_chapter_markdown"], "c");
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn patch_row_serializes_only_changed_columns() {
        let patch = BookPatch {
            cover_url: Some("new".into()),
            amazon_url: Some(None),
            ..Default::default()
        };
        let value = encode_row(&BookPatchRow::from(&patch));
        assert_eq!(value, json!({"cover_url": "new", "amazon_url": null}));
    }

    #[test]
    fn banner_with_unknown_position_is_skipped() {
        let row = BannerRow {
            id: "b".into(),
            image_url: "img".into(),
            link_url: "link".into(),
            position: "center".into(),
            created_at: None,
        };
        assert!(row.into_banner().is_none());
    }

    #[test]
    fn release_date_maps_to_date_text() {
        let release = Release {
            id: "r".into(),
            title: "Novo".into(),
            description: "d".into(),
            image_url: "img".into(),
            date: "Março de 2025".into(),
        };
        let value = encode_row(&ReleaseRow::from_release(&release));
        assert_eq!(value["date_text"], "Março de 2025");
        assert!(value.get("date").is_none());

        let decoded: ReleaseRow = serde_json::from_value(value).unwrap();
        assert_eq!(decoded.into_release(), release);
    }

    #[test]
    fn null_text_columns_decode_as_empty() {
        let release: ReleaseRow = serde_json::from_value(json!({
            "id": "r", "title": "Novo", "description": null, "image_url": "img", "date_text": null
        }))
        .unwrap();
        assert_eq!(release.description, "");
        assert_eq!(release.date_text, "");

        let banner: BannerRow = serde_json::from_value(json!({
            "id": "b", "image_url": "img", "link_url": null, "position": null
        }))
        .unwrap();
        assert_eq!(banner.link_url, "");
        assert!(banner.into_banner().is_none());
    }
}
