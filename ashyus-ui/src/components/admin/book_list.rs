//! Editing and removal of existing books

use ashyus_common::Book;
use dioxus::prelude::*;

use super::book_form::BookFields;
use super::forms::BookForm;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};

#[component]
pub fn EditBooksSection(
    catalog: ReadStore<CatalogState>,
    busy: bool,
    on_update_book: EventHandler<(String, BookForm)>,
    on_remove_book: EventHandler<String>,
) -> Element {
    let books = catalog.books().read().clone();
    let mut editing: Signal<Option<String>> = use_signal(|| None);

    if books.is_empty() {
        return rsx! {
            p { class: "text-slate-500 italic", "Nenhum livro cadastrado." }
        };
    }

    rsx! {
        ul { class: "divide-y divide-slate-800",
            for book in books {
                li { key: "{book.id}", class: "py-3",
                    if editing().as_deref() == Some(book.id.as_str()) {
                        BookEditor {
                            book: book.clone(),
                            busy,
                            on_save: move |args| {
                                on_update_book.call(args);
                                editing.set(None);
                            },
                            on_cancel: move |_| editing.set(None),
                        }
                    } else {
                        BookRow {
                            book: book.clone(),
                            busy,
                            on_edit: move |id| editing.set(Some(id)),
                            on_remove: on_remove_book,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BookRow(
    book: Book,
    busy: bool,
    on_edit: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let edit_id = book.id.clone();
    let remove_id = book.id.clone();

    rsx! {
        div { class: "flex items-center gap-4",
            img { class: "w-12 h-18 object-cover rounded", src: "{book.cover_url}", alt: "" }
            span { class: "flex-grow text-slate-200", "{book.title}" }
            Button {
                variant: ButtonVariant::Secondary,
                size: ButtonSize::Small,
                disabled: busy,
                onclick: move |_| on_edit.call(edit_id.clone()),
                "Editar"
            }
            Button {
                variant: ButtonVariant::Danger,
                size: ButtonSize::Small,
                disabled: busy,
                onclick: move |_| on_remove.call(remove_id.clone()),
                "Remover"
            }
        }
    }
}

#[component]
fn BookEditor(
    book: Book,
    busy: bool,
    on_save: EventHandler<(String, BookForm)>,
    on_cancel: EventHandler<()>,
) -> Element {
    let initial = BookForm::from_book(&book);
    let form = use_signal(move || initial);
    let id = book.id.clone();

    rsx! {
        div { class: "space-y-4 bg-slate-900/60 rounded p-4",
            BookFields { form }
            div { class: "flex gap-2",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    loading: busy,
                    onclick: move |_| on_save.call((id.clone(), form())),
                    "Salvar"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    onclick: move |_| on_cancel.call(()),
                    "Cancelar"
                }
            }
        }
    }
}
