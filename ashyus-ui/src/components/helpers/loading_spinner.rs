//! Loading spinner component

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(
    #[props(default = "Consultando os pergaminhos...".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-amber-500" }
            p { class: "ml-4 text-slate-300 font-serif italic", "{message}" }
        }
    }
}
