//! Reusable button component

use dioxus::prelude::*;

/// Chromeless button - accessibility and disabled handling without visual styling.
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let is_disabled = disabled || loading;

    rsx! {
        button {
            class: class.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled: is_disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if is_disabled { Some("true") } else { None },
            onclick: move |e| {
                if !is_disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Amber background - main calls to action
    Primary,
    /// Slate background - secondary/cancel actions
    Secondary,
    /// Red background - deletions
    Danger,
    /// Text only with hover
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let size_class = match size {
        ButtonSize::Small => "px-3 py-1.5 text-sm",
        ButtonSize::Medium => "px-4 py-2",
        ButtonSize::Large => "px-8 py-3 text-lg tracking-widest uppercase",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-amber-600 hover:bg-amber-500 text-slate-950 font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Secondary => {
            "bg-slate-700 hover:bg-slate-600 text-slate-200 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Danger => {
            "bg-red-700 hover:bg-red-600 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Ghost => "text-slate-400 hover:text-amber-400 hover:bg-slate-800/50",
    };

    let base = "inline-flex items-center justify-center gap-2 rounded transition-colors";
    let computed_class = match &class {
        Some(extra) => format!("{base} {size_class} {variant_class} {extra}"),
        None => format!("{base} {size_class} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            loading,
            r#type,
            class: Some(computed_class),
            onclick,
            if loading {
                span { class: "animate-spin rounded-full h-4 w-4 border-b-2 border-current" }
            }
            {children}
        }
    }
}
