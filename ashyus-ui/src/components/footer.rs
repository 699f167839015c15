//! Footer: newsletter sign-up and legal links

use ashyus_common::Page;
use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::text_input::{TextInput, TextInputType};
use crate::stores::site::NewsletterStatus;

#[component]
pub fn Footer(
    newsletter: NewsletterStatus,
    on_subscribe: EventHandler<String>,
    on_navigate: EventHandler<Page>,
) -> Element {
    let mut email = use_signal(String::new);
    let year = chrono::Local::now().year();
    let sending = newsletter == NewsletterStatus::Sending;

    rsx! {
        footer { class: "mt-16 border-t border-amber-900/40 bg-slate-950",
            div { class: "container mx-auto px-4 py-10 grid gap-8 md:grid-cols-2",
                div { class: "space-y-3",
                    h3 { class: "font-serif text-xl text-amber-400", "Receba notícias do Reino" }
                    p { class: "text-sm text-slate-400",
                        "Lançamentos, capítulos inéditos e segredos dos bastidores, direto no seu e-mail."
                    }
                    if newsletter == NewsletterStatus::Subscribed {
                        p { class: "text-emerald-400 font-serif italic",
                            "Obrigado! Seu nome foi inscrito nos pergaminhos."
                        }
                    } else {
                        form {
                            class: "flex gap-2",
                            onsubmit: move |evt| {
                                evt.prevent_default();
                                let value = email();
                                if !value.trim().is_empty() {
                                    on_subscribe.call(value);
                                    email.set(String::new());
                                }
                            },
                            div { class: "flex-grow",
                                TextInput {
                                    value: email(),
                                    on_input: move |v| email.set(v),
                                    input_type: TextInputType::Email,
                                    placeholder: "seu@email.com",
                                    disabled: sending,
                                    required: true,
                                }
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Medium,
                                r#type: "submit",
                                loading: sending,
                                onclick: |_| {},
                                "Inscrever"
                            }
                        }
                        if let NewsletterStatus::Failed(message) = &newsletter {
                            p { class: "text-red-400 text-sm", "{message}" }
                        }
                    }
                }
                div { class: "flex flex-col md:items-end gap-2 text-sm",
                    for page in [Page::Privacy, Page::Terms] {
                        a {
                            key: "{page.path()}",
                            class: "text-slate-400 hover:text-amber-300",
                            href: "{page.path()}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                on_navigate.call(page);
                            },
                            "{page.nav_label()}"
                        }
                    }
                    p { class: "text-slate-600 mt-4", "© {year} Ashyus Books. Todos os direitos reservados." }
                }
            }
        }
    }
}
