//! Form values collected by the admin panel. Everything is raw text; the web
//! crate trims and validates on submit.

use ashyus_common::{Banner, BannerPosition, Book};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub books2read_url: String,
    pub amazon_url: String,
    pub amazon_ebook_url: String,
    pub draft_book_url: String,
    pub cover_url: String,
    pub short_synopsis: String,
    pub full_synopsis: String,
    pub first_chapter_markdown: String,
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            books2read_url: book.books2read_url.clone(),
            amazon_url: book.amazon_url.clone().unwrap_or_default(),
            amazon_ebook_url: book.amazon_ebook_url.clone().unwrap_or_default(),
            draft_book_url: book.draft_book_url.clone().unwrap_or_default(),
            cover_url: book.cover_url.clone(),
            short_synopsis: book.short_synopsis.clone(),
            full_synopsis: book.full_synopsis.clone(),
            first_chapter_markdown: book.first_chapter_markdown.clone(),
        }
    }

    /// Text fields left blank, which the generator can fill
    pub fn missing_details(&self) -> bool {
        [
            &self.short_synopsis,
            &self.full_synopsis,
            &self.first_chapter_markdown,
        ]
        .iter()
        .any(|s| s.trim().is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BannerForm {
    pub image_url: String,
    pub link_url: String,
    pub position: BannerPosition,
}

impl BannerForm {
    pub fn preview(&self) -> Option<&str> {
        let url = self.image_url.trim();
        (!url.is_empty()).then_some(url)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReleaseForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub image_url: String,
}

/// Short label for a banner in the admin list
pub fn banner_label(banner: &Banner) -> String {
    let side = match banner.position {
        BannerPosition::Left => "Esquerda",
        BannerPosition::Right => "Direita",
    };
    format!("{side} · {}", banner.link_url)
}
