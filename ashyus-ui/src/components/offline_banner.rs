use dioxus::prelude::*;

/// Top strip shown while the browser reports no connectivity
#[component]
pub fn OfflineBanner(online: bool) -> Element {
    if online {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed top-0 inset-x-0 z-40 bg-red-900/95 text-red-100 text-center text-sm py-2",
            role: "status",
            "Você está offline. Os pergaminhos exibidos podem estar desatualizados."
        }
    }
}
