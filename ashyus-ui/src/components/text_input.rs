//! Text inputs with consistent styling

use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full bg-slate-900/70 border border-slate-700 rounded px-3 py-2 text-slate-200 placeholder-slate-500 focus:outline-none focus:ring-1 focus:ring-amber-500/60";

/// Input `type` attribute
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextInputType {
    #[default]
    Text,
    Password,
    Email,
    Url,
}

impl TextInputType {
    fn as_str(&self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Password => "password",
            TextInputType::Email => "email",
            TextInputType::Url => "url",
        }
    }
}

#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] input_type: TextInputType,
    #[props(default)] label: Option<&'static str>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] required: bool,
    #[props(default)] autofocus: bool,
) -> Element {
    rsx! {
        label { class: "block",
            if let Some(label) = label {
                span { class: "block text-xs uppercase tracking-wider text-slate-400 mb-1", "{label}" }
            }
            input {
                r#type: input_type.as_str(),
                class: FIELD_CLASS,
                value: "{value}",
                placeholder,
                disabled,
                required,
                oninput: move |e| on_input.call(e.value()),
                onmounted: move |event| async move {
                    if autofocus {
                        let _ = event.data().set_focus(true).await;
                    }
                },
            }
        }
    }
}

/// Multi-line variant of [`TextInput`]
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] label: Option<&'static str>,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default = 4)] rows: u32,
    #[props(default)] disabled: bool,
    #[props(default)] monospace: bool,
) -> Element {
    let font_class = if monospace { "font-mono text-sm" } else { "" };

    rsx! {
        label { class: "block",
            if let Some(label) = label {
                span { class: "block text-xs uppercase tracking-wider text-slate-400 mb-1", "{label}" }
            }
            textarea {
                class: "{FIELD_CLASS} {font_class}",
                rows: "{rows}",
                value: "{value}",
                placeholder,
                disabled,
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
