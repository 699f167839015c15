//! Site header: title (also the hidden admin trigger) and navigation

use ashyus_common::{HolidayTheme, Page};
use dioxus::prelude::*;

use crate::components::button::ChromelessButton;

fn theme_ornament(theme: HolidayTheme) -> Option<&'static str> {
    match theme {
        HolidayTheme::Christmas => Some("🎄"),
        HolidayTheme::NewYear => Some("✨"),
        HolidayTheme::Normal => None,
    }
}

#[component]
pub fn Header(
    current: Page,
    theme: HolidayTheme,
    on_navigate: EventHandler<Page>,
    /// Every click on the site title; the caller counts them
    on_title_click: EventHandler<()>,
) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "sticky top-0 z-20 bg-slate-950/90 backdrop-blur border-b border-amber-900/40",
            div { class: "container mx-auto px-4 h-16 flex items-center justify-between",
                ChromelessButton {
                    class: "font-serif text-2xl text-amber-400 select-none",
                    onclick: move |_| on_title_click.call(()),
                    "Ashyus Books"
                    if let Some(ornament) = theme_ornament(theme) {
                        span { class: "ml-2", "{ornament}" }
                    }
                }
                nav { class: "hidden md:flex gap-6",
                    for page in Page::NAV {
                        NavLink {
                            key: "{page.path()}",
                            page,
                            active: page == current,
                            on_navigate,
                        }
                    }
                }
                ChromelessButton {
                    class: "md:hidden text-slate-300 text-2xl",
                    aria_label: "Abrir menu",
                    onclick: move |_| menu_open.toggle(),
                    "☰"
                }
            }
            if menu_open() {
                nav { class: "md:hidden flex flex-col gap-2 px-4 pb-4",
                    for page in Page::NAV {
                        NavLink {
                            key: "{page.path()}",
                            page,
                            active: page == current,
                            on_navigate: move |page| {
                                menu_open.set(false);
                                on_navigate.call(page);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(page: Page, active: bool, on_navigate: EventHandler<Page>) -> Element {
    let class = if active {
        "text-amber-400 border-b border-amber-400"
    } else {
        "text-slate-300 hover:text-amber-300"
    };

    rsx! {
        a {
            class: "uppercase tracking-wider text-sm py-1 {class}",
            href: "{page.path()}",
            onclick: move |evt| {
                evt.prevent_default();
                on_navigate.call(page);
            },
            "{page.nav_label()}"
        }
    }
}
