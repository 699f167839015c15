//! Modal component using the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap and Escape-to-close
//! for free. `showModal()` throws if the dialog is already open, so the effect
//! checks the `open` attribute first.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::wasm_utils::{call_element_method, element_has_attribute};
use dioxus::prelude::*;

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Called on Escape or backdrop click
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let open = is_open();
        let currently_open = element_has_attribute(&dialog_id_for_effect, "open");
        if open && !currently_open {
            call_element_method(&dialog_id_for_effect, "showModal");
        } else if !open && currently_open {
            call_element_method(&dialog_id_for_effect, "close");
        }
    });

    let dialog_class = class.unwrap_or_default();

    // No display classes on the dialog itself: they would override the native
    // display:none of a closed dialog. Layout goes on the inner container.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/80 {dialog_class}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    div {
                        class: "max-h-full overflow-y-auto",
                        onclick: move |evt| evt.stop_propagation(),
                        {children}
                    }
                }
            }
        }
    }
}
