use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::wasm_utils::sleep_ms;

/// Fade-out duration once the visitor enters
pub const INTRO_FADE_MS: u64 = 1500;

/// Full-screen gate shown on first load. `on_enter` fires after the fade.
#[component]
pub fn IntroOverlay(on_enter: EventHandler<()>) -> Element {
    let mut leaving = use_signal(|| false);

    let opacity = if leaving() { "opacity-0" } else { "opacity-100" };

    rsx! {
        div { class: "fixed inset-0 z-50 flex flex-col items-center justify-center gap-8 bg-slate-950 transition-opacity duration-[1500ms] {opacity}",
            h1 { class: "font-serif text-5xl md:text-7xl text-amber-400 text-center tracking-wide",
                "Crônicas da Fantasia"
            }
            p { class: "text-slate-400 italic text-center max-w-md px-4",
                "Onde a razão encontra a runa e cada página guarda um segredo."
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Large,
                disabled: leaving(),
                onclick: move |_| {
                    leaving.set(true);
                    spawn(async move {
                        sleep_ms(INTRO_FADE_MS).await;
                        on_enter.call(());
                    });
                },
                "Adentrar o Reino"
            }
        }
    }
}
