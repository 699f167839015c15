//! Error display component

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Error box with an optional retry action
#[component]
pub fn ErrorDisplay(message: String, #[props(default)] on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { class: "bg-red-950/70 border border-red-800 text-red-100 px-4 py-3 rounded mb-4 flex items-center justify-between gap-4",
            p { "{message}" }
            if let Some(on_retry) = on_retry {
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| on_retry.call(()),
                    "Tentar novamente"
                }
            }
        }
    }
}
