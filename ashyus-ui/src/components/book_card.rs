//! Book card for grids and the books showcase

use ashyus_common::Book;
use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// External store links for a book, in display order
pub fn store_links(book: &Book) -> Vec<(&'static str, String)> {
    let mut links = Vec::new();
    if let Some(url) = &book.amazon_ebook_url {
        links.push(("E-book na Amazon", url.clone()));
    }
    if let Some(url) = &book.amazon_url {
        links.push(("Livro Físico", url.clone()));
    }
    if !book.books2read_url.is_empty() {
        links.push(("Outras Lojas", book.books2read_url.clone()));
    }
    links
}

#[component]
pub fn BookCard(
    book: Book,
    /// Open the reader for this book
    on_read: EventHandler<String>,
) -> Element {
    let links = store_links(&book);
    let id = book.id.clone();

    rsx! {
        div { class: "group bg-slate-900/60 border border-slate-800 rounded-lg overflow-hidden flex flex-col hover:border-amber-600/60 transition-colors",
            div { class: "aspect-[2/3] overflow-hidden bg-slate-950",
                img {
                    class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-500",
                    src: "{book.cover_url}",
                    alt: "Capa do livro {book.title}",
                    loading: "lazy",
                }
            }
            div { class: "p-4 flex flex-col gap-3 flex-grow",
                h3 { class: "font-serif text-xl text-amber-400", "{book.title}" }
                p { class: "text-sm text-slate-400 flex-grow", "{book.short_synopsis}" }
                div { class: "flex flex-wrap gap-2",
                    for (label , url) in links {
                        a {
                            key: "{label}",
                            class: "text-xs uppercase tracking-wider border border-amber-700/60 text-amber-300 rounded px-2 py-1 hover:bg-amber-700/20",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{label}"
                        }
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| on_read.call(id.clone()),
                    "Ler Sinopse e Capítulo"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn links_follow_ebook_print_universal_order() {
        let book = Book {
            id: "1".into(),
            title: "Runa".into(),
            books2read_url: "https://b2r".into(),
            amazon_url: Some("https://print".into()),
            amazon_ebook_url: Some("https://ebook".into()),
            draft_book_url: None,
            cover_url: String::new(),
            short_synopsis: String::new(),
            full_synopsis: String::new(),
            first_chapter_markdown: String::new(),
            created_at: Utc::now(),
        };
        let urls: Vec<String> = store_links(&book).into_iter().map(|(_, u)| u).collect();
        assert_eq!(urls, ["https://ebook", "https://print", "https://b2r"]);
    }
}
