//! Book grid with loading/error/empty states and the chapter reader
//!
//! Accepts `ReadStore<CatalogState>` and only subscribes to the fields it
//! renders.

use ashyus_common::Book;
use dioxus::prelude::*;

use crate::components::book_card::{store_links, BookCard};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::chapter_text::ChapterText;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::modal::Modal;
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};

#[component]
pub fn BookShowcase(
    state: ReadStore<CatalogState>,
    /// Show at most this many books
    #[props(default)]
    limit: Option<usize>,
    on_retry: EventHandler<()>,
) -> Element {
    let loading = *state.loading().read();
    let initialized = *state.initialized().read();
    let error = state.error().read().clone();
    let books = state.books().read().clone();

    let mut reading: Signal<Option<Book>> = use_signal(|| None);
    let reader_open: ReadSignal<bool> = use_memo(move || reading.read().is_some()).into();

    let shown: Vec<Book> = match limit {
        Some(n) => books.into_iter().take(n).collect(),
        None => books,
    };

    rsx! {
        section { class: "py-8",
            if let Some(err) = error {
                ErrorDisplay { message: err, on_retry }
            }
            if loading && !initialized {
                LoadingSpinner {}
            } else if shown.is_empty() {
                div { class: "text-center py-16 text-slate-500 font-serif italic",
                    "Nenhum livro foi encontrado na biblioteca... ainda."
                }
            } else {
                div { class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                    for book in shown {
                        BookCard {
                            key: "{book.id}",
                            book: book.clone(),
                            on_read: {
                                let book = book.clone();
                                move |_| reading.set(Some(book.clone()))
                            },
                        }
                    }
                }
            }
            Modal {
                is_open: reader_open,
                on_close: move |_| reading.set(None),
                if let Some(book) = reading() {
                    BookReader { book, on_close: move |_| reading.set(None) }
                }
            }
        }
    }
}

/// Full synopsis plus first chapter for one book
#[component]
fn BookReader(book: Book, on_close: EventHandler<()>) -> Element {
    let links = store_links(&book);

    rsx! {
        div { class: "bg-slate-950 border border-amber-800/50 rounded-lg max-w-3xl w-full p-6 space-y-6 text-left",
            div { class: "flex justify-between items-start gap-4",
                h2 { class: "font-serif text-3xl text-amber-400", "{book.title}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: move |_| on_close.call(()),
                    "Fechar"
                }
            }
            div { class: "text-slate-300 whitespace-pre-line", "{book.full_synopsis}" }
            ChapterText { markdown: book.first_chapter_markdown.clone() }
            div { class: "flex flex-wrap gap-3 pt-4 border-t border-slate-800",
                for (label , url) in links {
                    a {
                        key: "{label}",
                        class: "bg-amber-600 hover:bg-amber-500 text-slate-950 font-semibold rounded px-4 py-2",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{label}"
                    }
                }
                if let Some(draft) = book.draft_book_url.clone() {
                    a {
                        class: "border border-slate-600 text-slate-300 rounded px-4 py-2 hover:border-amber-500",
                        href: "{draft}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Ler Rascunho"
                    }
                }
            }
        }
    }
}
