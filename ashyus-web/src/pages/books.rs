use super::use_page_meta;
use crate::service::use_content;
use ashyus_common::Page;
use ashyus_ui::{BookShowcase, PageContainer};
use dioxus::prelude::*;

#[component]
pub fn Books() -> Element {
    use_page_meta(Page::Books);
    let service = use_content();
    let state = service.catalog;

    rsx! {
        PageContainer {
            title: "Biblioteca",
            subtitle: "Sinopses, primeiros capítulos e onde encontrar cada livro",
            BookShowcase {
                state,
                on_retry: move |_| {
                    let service = service.clone();
                    spawn(async move { service.initialize().await });
                },
            }
        }
    }
}
