use super::use_page_meta;
use ashyus_common::Page;
use ashyus_ui::{PrivacyView, TermsView};
use dioxus::prelude::*;

#[component]
pub fn Privacy() -> Element {
    use_page_meta(Page::Privacy);
    rsx! {
        PrivacyView {}
    }
}

#[component]
pub fn Terms() -> Element {
    use_page_meta(Page::Terms);
    rsx! {
        TermsView {}
    }
}
