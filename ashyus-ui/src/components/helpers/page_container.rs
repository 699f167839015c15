//! Page container component

use dioxus::prelude::*;

/// Standard page container with a heading
#[component]
pub fn PageContainer(
    title: &'static str,
    #[props(default)] subtitle: Option<&'static str>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "container mx-auto px-4 py-12 max-w-5xl",
            h1 { class: "font-serif text-4xl md:text-5xl text-amber-400 mb-2", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "text-slate-400 italic mb-8", "{subtitle}" }
            }
            {children}
        }
    }
}
