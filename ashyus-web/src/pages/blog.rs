use super::use_page_meta;
use crate::service::use_content;
use ashyus_common::Page;
use ashyus_ui::{BlogFeed, PageContainer};
use dioxus::prelude::*;

#[component]
pub fn Blog() -> Element {
    use_page_meta(Page::Blog);
    let state = use_content().catalog;

    rsx! {
        PageContainer {
            title: "Blog e Lançamentos",
            subtitle: "Novidades do universo Ashyus",
            BlogFeed { state }
        }
    }
}
