use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::text_input::{TextInput, TextInputType};
use crate::stores::admin::{AdminState, AdminStateStoreExt};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};

#[component]
pub fn AuthorPhotoSection(
    state: ReadStore<AdminState>,
    catalog: ReadStore<CatalogState>,
    on_save_author_photo: EventHandler<String>,
) -> Element {
    let mut url = use_signal(String::new);
    let busy = *state.busy().read();
    let current = catalog.author_photo().read().clone();

    use_effect(move || {
        let _ = state.saved_count().read();
        url.set(String::new());
    });

    let preview = if url().trim().is_empty() {
        current
    } else {
        url().trim().to_string()
    };

    rsx! {
        div { class: "space-y-4",
            img {
                class: "w-40 h-40 object-cover rounded-full border-2 border-amber-700/60",
                src: "{preview}",
                alt: "Foto do autor",
            }
            TextInput {
                value: url(),
                on_input: move |v| url.set(v),
                input_type: TextInputType::Url,
                label: "Nova foto (URL)",
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                loading: busy,
                onclick: move |_| on_save_author_photo.call(url()),
                "Salvar Foto"
            }
        }
    }
}
