//! Sponsor banners: desktop side rails and the mobile strip

use ashyus_common::{Banner, BannerPosition};
use dioxus::prelude::*;

use crate::components::button::ChromelessButton;

/// The list twice over, so a marquee scrolled by half its height loops without a seam.
pub fn marquee_items(banners: &[Banner]) -> Vec<Banner> {
    banners.iter().chain(banners.iter()).cloned().collect()
}

#[component]
fn BannerLink(banner: Banner, class: &'static str) -> Element {
    rsx! {
        a {
            class: "block {class}",
            href: "{banner.link_url}",
            target: "_blank",
            rel: "noopener noreferrer sponsored",
            img {
                class: "w-full rounded border border-slate-800 hover:border-amber-600 transition-colors",
                src: "{banner.image_url}",
                alt: "Parceiro",
                loading: "lazy",
            }
        }
    }
}

/// Vertical scrolling rail for one side. Renders nothing without banners.
#[component]
pub fn AdSidebar(banners: Vec<Banner>, position: BannerPosition) -> Element {
    if banners.is_empty() {
        return rsx! {};
    }

    let side = match position {
        BannerPosition::Left => "left-0",
        BannerPosition::Right => "right-0",
    };
    let items = marquee_items(&banners);

    rsx! {
        aside { class: "hidden xl:block fixed top-24 bottom-0 {side} w-40 overflow-hidden z-10",
            div { class: "animate-marquee-vertical flex flex-col gap-4 px-2",
                for (i , banner) in items.into_iter().enumerate() {
                    BannerLink { key: "{i}-{banner.id}", banner, class: "" }
                }
            }
        }
    }
}

/// Bottom strip on small screens with every banner. Closing it hides it until reload.
#[component]
pub fn MobileAdBanner(banners: Vec<Banner>, dismissed: bool, on_dismiss: EventHandler<()>) -> Element {
    if banners.is_empty() || dismissed {
        return rsx! {};
    }

    rsx! {
        div { class: "xl:hidden fixed bottom-0 inset-x-0 z-30 bg-slate-950/95 border-t border-amber-800/40 p-2",
            div { class: "flex items-center gap-2",
                div { class: "flex gap-2 overflow-x-auto flex-grow",
                    for banner in banners {
                        BannerLink { key: "{banner.id}", banner: banner.clone(), class: "w-32 shrink-0" }
                    }
                }
                ChromelessButton {
                    class: "text-slate-400 hover:text-white px-2 text-xl",
                    aria_label: "Fechar anúncios",
                    onclick: move |_| on_dismiss.call(()),
                    "×"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn marquee_repeats_list_once() {
        let banners: Vec<Banner> = ["a", "b"]
            .iter()
            .map(|id| Banner {
                id: id.to_string(),
                image_url: String::new(),
                link_url: String::new(),
                position: BannerPosition::Left,
                created_at: Utc::now(),
            })
            .collect();
        let ids: Vec<String> = marquee_items(&banners).into_iter().map(|b| b.id).collect();
        assert_eq!(ids, ["a", "b", "a", "b"]);
        assert!(marquee_items(&[]).is_empty());
    }
}
