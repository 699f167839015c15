use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::text_input::{TextInput, TextInputType};

#[component]
pub fn AdminLogin(error: Option<String>, on_login: EventHandler<(String, String)>) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        form {
            class: "space-y-4 max-w-sm mx-auto",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_login.call((username(), password()));
                password.set(String::new());
            },
            h2 { class: "font-serif text-2xl text-amber-400 text-center", "Portal do Escriba" }
            TextInput {
                value: username(),
                on_input: move |v| username.set(v),
                label: "Usuário",
                autofocus: true,
            }
            TextInput {
                value: password(),
                on_input: move |v| password.set(v),
                input_type: TextInputType::Password,
                label: "Senha",
            }
            if let Some(error) = error {
                p { class: "text-red-400 text-sm", "{error}" }
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                r#type: "submit",
                class: "w-full",
                onclick: |_| {},
                "Entrar"
            }
        }
    }
}
