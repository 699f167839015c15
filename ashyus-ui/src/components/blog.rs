//! News feed: upcoming releases first, then published books newest first

use ashyus_common::Book;
use dioxus::prelude::*;

use crate::components::helpers::LoadingSpinner;
use crate::components::release_card::ReleaseCard;
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};

/// A published book presented as a blog entry
#[component]
pub fn BlogPost(book: Book) -> Element {
    let published = book.created_at.format("%d/%m/%Y").to_string();

    rsx! {
        article { class: "border-b border-slate-800 pb-8 flex flex-col sm:flex-row gap-6",
            img {
                class: "w-32 aspect-[2/3] object-cover rounded",
                src: "{book.cover_url}",
                alt: "Capa do livro {book.title}",
                loading: "lazy",
            }
            div { class: "flex flex-col gap-2",
                p { class: "text-xs text-slate-500 uppercase tracking-wider", "Publicado em {published}" }
                h3 { class: "font-serif text-2xl text-amber-400", "{book.title}" }
                p { class: "text-slate-300", "{book.short_synopsis}" }
                a {
                    class: "text-amber-500 hover:text-amber-300 text-sm",
                    href: "{book.books2read_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Disponível nas lojas →"
                }
            }
        }
    }
}

#[component]
pub fn BlogFeed(state: ReadStore<CatalogState>) -> Element {
    let loading = *state.loading().read();
    let initialized = *state.initialized().read();
    let releases = state.releases().read().clone();
    let books = state.read().books_newest_first();

    if loading && !initialized {
        return rsx! {
            LoadingSpinner {}
        };
    }

    rsx! {
        div { class: "space-y-12",
            if !releases.is_empty() {
                section { class: "space-y-6",
                    h2 { class: "font-serif text-3xl text-amber-300", "Próximos Lançamentos" }
                    for release in releases {
                        ReleaseCard { key: "{release.id}", release: release.clone() }
                    }
                }
            }
            section { class: "space-y-8",
                h2 { class: "font-serif text-3xl text-amber-300", "Crônicas Publicadas" }
                if books.is_empty() {
                    p { class: "text-slate-500 italic", "Nenhuma crônica publicada ainda." }
                }
                for book in books {
                    BlogPost { key: "{book.id}", book: book.clone() }
                }
            }
        }
    }
}
