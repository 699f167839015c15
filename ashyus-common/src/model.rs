use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Shown on the about page until a stored photo is loaded
pub const DEFAULT_AUTHOR_PHOTO: &str =
    "https://picsum.photos/seed/author_ashyus/600/600?grayscale&blur=2";

/// Cover used for books added without one. Seeded by book ID so it stays stable.
pub fn placeholder_cover_url(id: &str) -> String {
    format!("https://picsum.photos/seed/{id}/800/1200")
}

/// A published book
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Universal store link (books2read), always present
    pub books2read_url: String,
    pub amazon_url: Option<String>,
    pub amazon_ebook_url: Option<String>,
    pub draft_book_url: Option<String>,
    pub cover_url: String,
    pub short_synopsis: String,
    pub full_synopsis: String,
    pub first_chapter_markdown: String,
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Main call-to-action link: the ebook if listed, otherwise the print listing.
    pub fn primary_store_link(&self) -> Option<&str> {
        self.amazon_ebook_url
            .as_deref()
            .or(self.amazon_url.as_deref())
    }
}

/// Order books so the most recently created comes first
pub fn sort_newest_first(books: &mut [Book]) {
    books.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Which sidebar a banner is shown in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BannerPosition {
    Left,
    #[default]
    Right,
}

impl BannerPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerPosition::Left => "left",
            BannerPosition::Right => "right",
        }
    }
}

impl fmt::Display for BannerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(pub String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown banner position: {:?}", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for BannerPosition {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(BannerPosition::Left),
            "right" => Ok(BannerPosition::Right),
            other => Err(ParsePositionError(other.to_string())),
        }
    }
}

/// Sponsor/affiliate image with an outbound link
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub id: String,
    pub image_url: String,
    pub link_url: String,
    pub position: BannerPosition,
    pub created_at: DateTime<Utc>,
}

/// Announced upcoming book
#[derive(Clone, Debug, PartialEq)]
pub struct Release {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Free text entered by the admin, e.g. "Março de 2025"
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn book(id: &str, created_at: DateTime<Utc>) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Book {id}"),
            books2read_url: "https://books2read.com/x".to_string(),
            amazon_url: None,
            amazon_ebook_url: None,
            draft_book_url: None,
            cover_url: placeholder_cover_url(id),
            short_synopsis: String::new(),
            full_synopsis: String::new(),
            first_chapter_markdown: String::new(),
            created_at,
        }
    }

    #[test]
    fn position_parses_wire_values() {
        assert_eq!("left".parse::<BannerPosition>(), Ok(BannerPosition::Left));
        assert_eq!("right".parse::<BannerPosition>(), Ok(BannerPosition::Right));
        assert!("top".parse::<BannerPosition>().is_err());
        assert_eq!(BannerPosition::Left.to_string(), "left");
    }

    #[test]
    fn primary_link_prefers_ebook() {
        let mut b = book("1", Utc::now());
        assert_eq!(b.primary_store_link(), None);

        b.amazon_url = Some("https://amazon/print".to_string());
        assert_eq!(b.primary_store_link(), Some("https://amazon/print"));

        b.amazon_ebook_url = Some("https://amazon/kindle".to_string());
        assert_eq!(b.primary_store_link(), Some("https://amazon/kindle"));
    }

    #[test]
    fn newest_first_ordering() {
        let old = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let new = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let mut books = vec![book("old", old), book("new", new)];
        sort_newest_first(&mut books);
        assert_eq!(books[0].id, "new");
        assert_eq!(books[1].id, "old");
    }

    #[test]
    fn placeholder_is_seeded_by_id() {
        assert_eq!(
            placeholder_cover_url("123"),
            "https://picsum.photos/seed/123/800/1200"
        );
    }
}
