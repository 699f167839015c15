use ashyus_common::Page;
use dioxus::prelude::*;

use crate::components::book_showcase::BookShowcase;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::stores::catalog::CatalogState;

/// Books shown in the home page grid
pub const HOME_BOOK_LIMIT: usize = 6;

#[component]
pub fn HomeView(
    state: ReadStore<CatalogState>,
    on_navigate: EventHandler<Page>,
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "relative py-24 text-center px-4",
            p { class: "text-xs uppercase tracking-[0.4em] text-amber-600 mb-4", "Dark Fantasy & Romance" }
            h1 { class: "font-serif text-5xl md:text-7xl text-amber-400 mb-6", "Crônicas da Fantasia" }
            p { class: "max-w-2xl mx-auto text-slate-300 text-lg mb-10",
                "Histórias onde a lógica enfrenta o místico e cada escolha cobra seu preço. Bem-vindo ao universo de Ashyus."
            }
            div { class: "flex flex-wrap justify-center gap-4",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Large,
                    onclick: move |_| on_navigate.call(Page::Books),
                    "Explorar a Biblioteca"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Large,
                    onclick: move |_| on_navigate.call(Page::About),
                    "Conhecer o Autor"
                }
            }
        }
        div { class: "container mx-auto px-4",
            h2 { class: "font-serif text-3xl text-amber-300 mb-2", "Últimos Lançamentos" }
            BookShowcase { state, limit: HOME_BOOK_LIMIT, on_retry }
        }
    }
}
