use dioxus::prelude::*;

use super::forms::ReleaseForm;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::text_input::{TextArea, TextInput, TextInputType};
use crate::stores::admin::{AdminState, AdminStateStoreExt};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};

#[component]
pub fn ReleasesSection(
    state: ReadStore<AdminState>,
    catalog: ReadStore<CatalogState>,
    on_add_release: EventHandler<ReleaseForm>,
    on_remove_release: EventHandler<String>,
) -> Element {
    let mut form = use_signal(ReleaseForm::default);
    let busy = *state.busy().read();
    let releases = catalog.releases().read().clone();

    use_effect(move || {
        let _ = state.saved_count().read();
        form.set(ReleaseForm::default());
    });

    let f = form();

    rsx! {
        div { class: "space-y-4",
            TextInput {
                value: f.title,
                on_input: move |v| form.write().title = v,
                label: "Título",
            }
            TextInput {
                value: f.date,
                on_input: move |v| form.write().date = v,
                label: "Data prevista",
                placeholder: "Ex.: Dezembro de 2025",
            }
            TextInput {
                value: f.image_url,
                on_input: move |v| form.write().image_url = v,
                input_type: TextInputType::Url,
                label: "URL da imagem",
            }
            TextArea {
                value: f.description,
                on_input: move |v| form.write().description = v,
                label: "Descrição",
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                loading: busy,
                onclick: move |_| on_add_release.call(form()),
                "Anunciar Lançamento"
            }
            ul { class: "divide-y divide-slate-800 mt-6",
                for release in releases {
                    li { key: "{release.id}", class: "py-2 flex items-center gap-3",
                        span { class: "flex-grow text-slate-300", "{release.title}" }
                        span { class: "text-xs text-slate-500", "{release.date}" }
                        Button {
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Small,
                            disabled: busy,
                            onclick: {
                                let id = release.id.clone();
                                move |_| on_remove_release.call(id.clone())
                            },
                            "Remover"
                        }
                    }
                }
            }
        }
    }
}
