use super::{navigate_to, use_page_meta};
use crate::service::use_content;
use ashyus_common::Page;
use ashyus_ui::HomeView;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    use_page_meta(Page::Home);
    let service = use_content();
    let state = service.catalog;

    rsx! {
        HomeView {
            state,
            on_navigate: move |page| navigate_to(page),
            on_retry: move |_| {
                let service = service.clone();
                spawn(async move { service.initialize().await });
            },
        }
    }
}

/// Unknown paths render the home page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("Unknown path /{}, showing home", segments.join("/"));
    rsx! {
        Home {}
    }
}
