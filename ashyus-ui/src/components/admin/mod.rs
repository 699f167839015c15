//! Password-gated content panel
//!
//! Pure view: login, tab switching and every write are reported through
//! callbacks. Each section keeps its own form state and clears it when
//! `AdminState::saved_count` changes.

mod author_photo;
mod banners;
mod book_form;
mod book_list;
mod forms;
mod login;
mod releases;

pub use forms::{BannerForm, BookForm, ReleaseForm};

use dioxus::prelude::*;

use author_photo::AuthorPhotoSection;
use banners::BannersSection;
use book_form::AddBookSection;
use book_list::EditBooksSection;
use login::AdminLogin;
use releases::ReleasesSection;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::segmented_control::{Segment, SegmentedControl};
use crate::stores::admin::{AdminState, AdminStateStoreExt, AdminTab, NoticeKind};
use crate::stores::catalog::{CatalogState, CatalogStateStoreExt};

#[component]
pub fn AdminPanel(
    state: ReadStore<AdminState>,
    catalog: ReadStore<CatalogState>,
    generator_available: bool,
    on_login: EventHandler<(String, String)>,
    on_logout: EventHandler<()>,
    on_close: EventHandler<()>,
    on_tab_change: EventHandler<AdminTab>,
    on_add_book: EventHandler<BookForm>,
    on_update_book: EventHandler<(String, BookForm)>,
    on_remove_book: EventHandler<String>,
    on_add_banner: EventHandler<BannerForm>,
    on_remove_banner: EventHandler<String>,
    on_add_release: EventHandler<ReleaseForm>,
    on_remove_release: EventHandler<String>,
    on_save_author_photo: EventHandler<String>,
) -> Element {
    let authenticated = *state.authenticated().read();
    let tab = *state.tab().read();
    let busy = *state.busy().read();
    let notice = state.notice().read().clone();
    let login_error = state.login_error().read().clone();
    let offline_mode = *catalog.offline_mode().read();

    rsx! {
        div { class: "bg-slate-950 border border-amber-800/50 rounded-lg w-[min(56rem,95vw)] p-6 space-y-6 text-left",
            div { class: "flex items-center justify-between",
                h2 { class: "font-serif text-2xl text-amber-400", "Painel do Autor" }
                div { class: "flex gap-2",
                    if authenticated {
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_| on_logout.call(()),
                            "Sair"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_close.call(()),
                        "Fechar"
                    }
                }
            }
            if !authenticated {
                AdminLogin { error: login_error, on_login }
            } else {
                if offline_mode {
                    div { class: "bg-amber-950/60 border border-amber-700 text-amber-200 text-sm rounded px-3 py-2",
                        "Modo offline: o banco de dados não está configurado. As alterações valem só nesta sessão e serão perdidas ao recarregar a página."
                    }
                }
                if let Some(notice) = notice {
                    div { class: notice_class(notice.kind), "{notice.message}" }
                }
                SegmentedControl {
                    segments: AdminTab::ALL.iter().map(|t| Segment::new(t.label(), t.key())).collect::<Vec<_>>(),
                    selected: tab.key().to_string(),
                    on_select: move |key: &'static str| {
                        if let Some(tab) = AdminTab::from_key(key) {
                            on_tab_change.call(tab);
                        }
                    },
                }
                match tab {
                    AdminTab::AddBook => rsx! {
                        AddBookSection { state, generator_available, on_add_book }
                    },
                    AdminTab::EditBooks => rsx! {
                        EditBooksSection { catalog, busy, on_update_book, on_remove_book }
                    },
                    AdminTab::Banners => rsx! {
                        BannersSection { state, catalog, on_add_banner, on_remove_banner }
                    },
                    AdminTab::Releases => rsx! {
                        ReleasesSection { state, catalog, on_add_release, on_remove_release }
                    },
                    AdminTab::AuthorPhoto => rsx! {
                        AuthorPhotoSection { state, catalog, on_save_author_photo }
                    },
                }
            }
        }
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "bg-emerald-950/60 border border-emerald-700 text-emerald-200 text-sm rounded px-3 py-2",
        NoticeKind::Warning => "bg-amber-950/60 border border-amber-700 text-amber-200 text-sm rounded px-3 py-2",
        NoticeKind::Error => "bg-red-950/60 border border-red-700 text-red-200 text-sm rounded px-3 py-2",
    }
}
