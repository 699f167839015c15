use ashyus_common::Release;
use dioxus::prelude::*;

/// Announcement of an upcoming book
#[component]
pub fn ReleaseCard(release: Release) -> Element {
    rsx! {
        article { class: "flex flex-col md:flex-row gap-6 bg-gradient-to-r from-amber-950/40 to-slate-900/60 border border-amber-800/40 rounded-lg p-6",
            img {
                class: "w-full md:w-48 aspect-[2/3] object-cover rounded shadow-lg",
                src: "{release.image_url}",
                alt: "{release.title}",
                loading: "lazy",
            }
            div { class: "flex flex-col gap-3",
                span { class: "text-xs uppercase tracking-[0.3em] text-amber-500", "Em Breve" }
                h3 { class: "font-serif text-2xl text-amber-300", "{release.title}" }
                if !release.date.is_empty() {
                    p { class: "text-sm text-slate-400 italic", "{release.date}" }
                }
                p { class: "text-slate-300 whitespace-pre-line", "{release.description}" }
            }
        }
    }
}
