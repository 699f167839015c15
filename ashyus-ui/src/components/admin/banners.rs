use ashyus_common::BannerPosition;
use dioxus::prelude::*;

use super::forms::{banner_label, BannerForm};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::segmented_control::{Segment, SegmentedControl};
use crate::components::text_input::{TextInput, TextInputType};
use crate::stores::admin::{AdminState, AdminStateStoreExt};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};

#[component]
pub fn BannersSection(
    state: ReadStore<AdminState>,
    catalog: ReadStore<CatalogState>,
    on_add_banner: EventHandler<BannerForm>,
    on_remove_banner: EventHandler<String>,
) -> Element {
    let mut form = use_signal(BannerForm::default);
    let busy = *state.busy().read();
    let banners = catalog.banners().read().clone();

    use_effect(move || {
        let _ = state.saved_count().read();
        form.set(BannerForm::default());
    });

    let f = form();
    let preview = f.preview().map(str::to_string);

    rsx! {
        div { class: "space-y-4",
            TextInput {
                value: f.image_url.clone(),
                on_input: move |v| form.write().image_url = v,
                input_type: TextInputType::Url,
                label: "URL da imagem",
            }
            TextInput {
                value: f.link_url.clone(),
                on_input: move |v| form.write().link_url = v,
                input_type: TextInputType::Url,
                label: "Link do parceiro",
            }
            SegmentedControl {
                segments: vec![
                    Segment::new("Esquerda", BannerPosition::Left.as_str()),
                    Segment::new("Direita", BannerPosition::Right.as_str()),
                ],
                selected: f.position.as_str().to_string(),
                on_select: move |value: &'static str| {
                    if let Ok(position) = value.parse() {
                        form.write().position = position;
                    }
                },
            }
            if let Some(src) = preview {
                img { class: "w-32 rounded border border-slate-700", src: "{src}", alt: "Prévia" }
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                loading: busy,
                onclick: move |_| on_add_banner.call(form()),
                "Adicionar Banner"
            }
            ul { class: "divide-y divide-slate-800 mt-6",
                for banner in banners {
                    li { key: "{banner.id}", class: "py-2 flex items-center gap-3",
                        img { class: "w-16 rounded", src: "{banner.image_url}", alt: "" }
                        span { class: "flex-grow text-sm text-slate-300 truncate", "{banner_label(&banner)}" }
                        Button {
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Small,
                            disabled: busy,
                            onclick: {
                                let id = banner.id.clone();
                                move |_| on_remove_banner.call(id.clone())
                            },
                            "Remover"
                        }
                    }
                }
            }
        }
    }
}
