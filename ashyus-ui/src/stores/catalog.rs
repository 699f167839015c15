//! Catalog state store

use ashyus_common::{sort_newest_first, Banner, BannerPosition, Book, Release, DEFAULT_AUTHOR_PHOTO};
use dioxus::prelude::*;

/// Site content as last synchronized
#[derive(Clone, Debug, PartialEq, Store)]
pub struct CatalogState {
    pub books: Vec<Book>,
    pub banners: Vec<Banner>,
    pub releases: Vec<Release>,
    pub author_photo: String,
    /// Whether a load or add is in flight
    pub loading: bool,
    /// User-facing error from the last load or add
    pub error: Option<String>,
    pub initialized: bool,
    /// No remote store configured: edits are lost on reload
    pub offline_mode: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            banners: Vec::new(),
            releases: Vec::new(),
            author_photo: DEFAULT_AUTHOR_PHOTO.to_string(),
            loading: true,
            error: None,
            initialized: false,
            offline_mode: false,
        }
    }
}

impl CatalogState {
    pub fn banners_for(&self, position: BannerPosition) -> Vec<Banner> {
        self.banners
            .iter()
            .filter(|b| b.position == position)
            .cloned()
            .collect()
    }

    /// Books for the blog feed, newest first regardless of catalog order
    pub fn books_newest_first(&self) -> Vec<Book> {
        let mut books = self.books.clone();
        sort_newest_first(&mut books);
        books
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn book(id: &str, year: i32) -> Book {
        Book {
            id: id.to_string(),
            title: id.to_string(),
            books2read_url: String::new(),
            amazon_url: None,
            amazon_ebook_url: None,
            draft_book_url: None,
            cover_url: String::new(),
            short_synopsis: String::new(),
            full_synopsis: String::new(),
            first_chapter_markdown: String::new(),
            created_at: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn banner(id: &str, position: BannerPosition) -> Banner {
        Banner {
            id: id.to_string(),
            image_url: String::new(),
            link_url: String::new(),
            position,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn starts_loading_with_default_photo() {
        let state = CatalogState::default();
        assert!(state.loading);
        assert_eq!(state.author_photo, DEFAULT_AUTHOR_PHOTO);
    }

    #[test]
    fn banners_split_by_side() {
        let state = CatalogState {
            banners: vec![
                banner("a", BannerPosition::Left),
                banner("b", BannerPosition::Right),
                banner("c", BannerPosition::Left),
            ],
            ..Default::default()
        };
        let left: Vec<String> = state
            .banners_for(BannerPosition::Left)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(left, ["a", "c"]);
    }

    #[test]
    fn blog_books_are_newest_first() {
        let state = CatalogState {
            books: vec![book("old", 2020), book("new", 2025), book("mid", 2023)],
            ..Default::default()
        };
        let ids: Vec<String> = state.books_newest_first().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }
}
