pub mod pages;
pub mod service;

use ashyus_common::Page;
use dioxus::prelude::*;
use pages::{About, AppLayout, Blog, Books, Home, NotFound, Privacy, Terms};
use service::ContentService;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/books")]
    Books {},
    #[route("/about")]
    About {},
    #[route("/blog")]
    Blog {},
    #[route("/privacy")]
    Privacy {},
    #[route("/terms")]
    Terms {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Page this route renders; unknown paths show the home page
    pub fn page(&self) -> Page {
        match self {
            Route::Home {} | Route::NotFound { .. } => Page::Home,
            Route::Books {} => Page::Books,
            Route::About {} => Page::About,
            Route::Blog {} => Page::Blog,
            Route::Privacy {} => Page::Privacy,
            Route::Terms {} => Page::Terms,
        }
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Books => Route::Books {},
            Page::About => Route::About {},
            Page::Blog => Route::Blog {},
            Page::Privacy => Route::Privacy {},
            Page::Terms => Route::Terms {},
        }
    }
}

#[component]
pub fn App() -> Element {
    let service = use_hook(ContentService::from_build_env);
    use_context_provider(|| service.clone());

    use_hook(|| {
        let service = service.clone();
        spawn(async move { service.initialize().await });
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_pages_and_back() {
        for page in [
            Page::Home,
            Page::Books,
            Page::About,
            Page::Blog,
            Page::Privacy,
            Page::Terms,
        ] {
            assert_eq!(Route::from(page).page(), page);
        }
        let unknown = Route::NotFound {
            segments: vec!["grimorio".into()],
        };
        assert_eq!(unknown.page(), Page::Home);
    }
}
