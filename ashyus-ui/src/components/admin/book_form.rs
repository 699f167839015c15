//! New-book form and the field set shared with the book editor

use dioxus::prelude::*;

use super::forms::BookForm;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::text_input::{TextArea, TextInput, TextInputType};
use crate::stores::admin::{AdminState, AdminStateStoreExt};

#[component]
pub fn BookFields(form: Signal<BookForm>) -> Element {
    let mut form = form;
    let f = form();

    rsx! {
        div { class: "grid gap-4 md:grid-cols-2",
            TextInput {
                value: f.title,
                on_input: move |v| form.write().title = v,
                label: "Título",
                required: true,
            }
            TextInput {
                value: f.books2read_url,
                on_input: move |v| form.write().books2read_url = v,
                input_type: TextInputType::Url,
                label: "Link Books2Read",
                required: true,
            }
            TextInput {
                value: f.amazon_url,
                on_input: move |v| form.write().amazon_url = v,
                input_type: TextInputType::Url,
                label: "Amazon (livro físico)",
            }
            TextInput {
                value: f.amazon_ebook_url,
                on_input: move |v| form.write().amazon_ebook_url = v,
                input_type: TextInputType::Url,
                label: "Amazon (e-book)",
            }
            TextInput {
                value: f.draft_book_url,
                on_input: move |v| form.write().draft_book_url = v,
                input_type: TextInputType::Url,
                label: "Rascunho",
            }
            TextInput {
                value: f.cover_url,
                on_input: move |v| form.write().cover_url = v,
                input_type: TextInputType::Url,
                label: "URL da capa",
                placeholder: "Vazio usa uma capa provisória",
            }
        }
        div { class: "grid gap-4 mt-4",
            TextArea {
                value: f.short_synopsis,
                on_input: move |v| form.write().short_synopsis = v,
                label: "Sinopse curta",
                rows: 2,
            }
            TextArea {
                value: f.full_synopsis,
                on_input: move |v| form.write().full_synopsis = v,
                label: "Sinopse completa",
                rows: 5,
            }
            TextArea {
                value: f.first_chapter_markdown,
                on_input: move |v| form.write().first_chapter_markdown = v,
                label: "Primeiro capítulo (markdown)",
                rows: 8,
                monospace: true,
            }
        }
    }
}

#[component]
pub fn AddBookSection(
    state: ReadStore<AdminState>,
    generator_available: bool,
    on_add_book: EventHandler<BookForm>,
) -> Element {
    let mut form = use_signal(BookForm::default);
    let busy = *state.busy().read();

    use_effect(move || {
        let _ = state.saved_count().read();
        form.set(BookForm::default());
    });

    let hint = if !form().missing_details() {
        None
    } else if generator_available {
        Some("Campos de texto vazios serão gerados automaticamente a partir do título.")
    } else {
        Some("Sem gerador configurado: campos vazios ficarão em branco.")
    };

    rsx! {
        div { class: "space-y-4",
            BookFields { form }
            if let Some(hint) = hint {
                p { class: "text-xs text-slate-500 italic", "{hint}" }
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                loading: busy,
                onclick: move |_| on_add_book.call(form()),
                "Adicionar Livro"
            }
        }
    }
}
