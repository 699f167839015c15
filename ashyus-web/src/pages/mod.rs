mod about;
mod blog;
mod books;
mod home;
mod layout;
mod legal;

pub use about::About;
pub use blog::Blog;
pub use books::Books;
pub use home::{Home, NotFound};
pub use layout::AppLayout;
pub use legal::{Privacy, Terms};

use crate::Route;
use ashyus_common::Page;
use ashyus_ui::wasm_utils::{scroll_to_top, set_document_title};
use dioxus::prelude::*;

/// Set the document title and jump to the top when a page mounts.
fn use_page_meta(page: Page) {
    use_hook(move || {
        set_document_title(page.title());
        scroll_to_top();
    });
}

/// Navigation callback for view components that link to other pages.
fn navigate_to(page: Page) {
    navigator().push(Route::from(page));
}
