use super::use_page_meta;
use crate::service::use_content;
use ashyus_common::Page;
use ashyus_ui::stores::CatalogStateStoreExt;
use ashyus_ui::AboutView;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    use_page_meta(Page::About);
    let catalog = use_content().catalog;
    let author_photo = catalog.author_photo().read().clone();

    rsx! {
        AboutView { author_photo }
    }
}
