//! ContentService - owns the sync layer and the UI stores
//!
//! Every content operation goes through `ContentSync`, which pushes each
//! catalog change into `Store<CatalogState>` so views update, including the
//! loading flag while a write is still in flight.
//! Admin writes also drive `Store<AdminState>` (busy flag, inline notice,
//! form reset counter).
//!
//! Created inside the component tree because stores are not `Send`.
//! Access with [`use_content`].

use ashyus_common::{Book, HolidayTheme};
use ashyus_core::{
    AdminCredentials, BookDetailsGenerator, BookPatch, Catalog, ContentError, ContentSync,
    GeminiGenerator, NewBook, NewsletterClient, NewsletterError, Persistence, RemoteStore,
    RestStore, SiteConfig,
};
use ashyus_ui::stores::{
    AdminNotice, AdminState, AdminStateStoreExt, AdminTab, CatalogState, NewsletterStatus,
    SiteUiState, SiteUiStateStoreExt,
};
use ashyus_ui::wasm_utils::{navigator_online, sleep_ms};
use ashyus_ui::{BannerForm, BookForm, ReleaseForm};
use dioxus::prelude::*;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{error, info, warn};

/// How long the newsletter thank-you note stays up
const NEWSLETTER_THANKS_MS: u64 = 5000;

#[derive(Clone)]
pub struct ContentService {
    pub catalog: Store<CatalogState>,
    pub site: Store<SiteUiState>,
    pub admin: Store<AdminState>,
    sync: Rc<ContentSync>,
    credentials: AdminCredentials,
    newsletter: NewsletterClient,
    generator_available: bool,
}

pub fn use_content() -> ContentService {
    use_context()
}

impl ContentService {
    pub fn from_build_env() -> Self {
        Self::new(SiteConfig::from_build_env())
    }

    pub fn new(config: SiteConfig) -> Self {
        if let Err(e) = config.validate() {
            error!("{}", e);
        }

        let remote: Option<Arc<dyn RemoteStore>> = config.remote().map(|r| {
            info!("Using remote store at {}", r.url);
            Arc::new(RestStore::new(r.url, r.anon_key)) as Arc<dyn RemoteStore>
        });
        let generator: Option<Arc<dyn BookDetailsGenerator>> =
            config.gemini_api_key.clone().map(|key| {
                Arc::new(GeminiGenerator::new(key)) as Arc<dyn BookDetailsGenerator>
            });
        if generator.is_none() {
            info!("No generator key set, book details must be written by hand");
        }

        let site = SiteUiState {
            online: navigator_online(),
            holiday_theme: HolidayTheme::today(),
            ..Default::default()
        };

        let offline_mode = remote.is_none();
        let generator_available = generator.is_some();
        let catalog = Store::new(CatalogState {
            offline_mode,
            ..Default::default()
        });
        let sync = ContentSync::new(remote, generator)
            .on_change(move |c| publish_into(catalog, c, offline_mode));

        Self {
            catalog,
            site: Store::new(site),
            admin: Store::new(AdminState::default()),
            generator_available,
            sync: Rc::new(sync),
            credentials: AdminCredentials::from_config(&config),
            newsletter: NewsletterClient::new(config.web3forms_access_key.clone()),
        }
    }

    pub fn generator_available(&self) -> bool {
        self.generator_available
    }

    pub async fn initialize(&self) {
        publish_into(self.catalog, &self.sync.snapshot(), self.sync.is_offline());
        self.sync.initialize().await;
    }

    // =========================================================================
    // Admin session
    // =========================================================================

    pub fn open_admin(&self) {
        self.site.admin_open().set(true);
    }

    pub fn close_admin(&self) {
        self.site.admin_open().set(false);
        self.admin.notice().set(None);
    }

    pub fn login(&self, username: &str, password: &str) {
        match self.credentials.verify(username, password) {
            Ok(()) => {
                info!("Admin logged in");
                self.admin.authenticated().set(true);
                self.admin.login_error().set(None);
            }
            Err(e) => self.admin.login_error().set(Some(e.to_string())),
        }
    }

    pub fn logout(&self) {
        let mut admin = self.admin;
        admin.set(AdminState::default());
    }

    pub fn select_tab(&self, tab: AdminTab) {
        self.admin.tab().set(tab);
        self.admin.notice().set(None);
    }

    // =========================================================================
    // Content writes
    // =========================================================================

    /// Run one admin write and report the outcome in the panel.
    async fn run_write(
        &self,
        done: &str,
        op: impl Future<Output = Result<Persistence, ContentError>>,
    ) {
        self.admin.busy().set(true);
        self.admin.notice().set(None);

        let result = op.await;
        self.admin.busy().set(false);

        let notice = match result {
            Ok(Persistence::Remote) => AdminNotice::success(done),
            Ok(Persistence::LocalOnly) => AdminNotice::warning(format!(
                "{done} Sem banco de dados: a alteração vale só nesta sessão e será perdida ao recarregar."
            )),
            Err(e) => {
                warn!("Admin write failed: {}", e);
                self.admin.notice().set(Some(AdminNotice::error(describe_error(&e))));
                return;
            }
        };
        self.admin.notice().set(Some(notice));
        *self.admin.saved_count().write() += 1;
    }

    pub async fn add_book(&self, form: BookForm) {
        self.run_write("Livro adicionado!", self.sync.add_book(new_book_from_form(form)))
            .await;
    }

    pub async fn update_book(&self, id: String, form: BookForm) {
        let Some(book) = self.sync.snapshot().books.into_iter().find(|b| b.id == id) else {
            self.admin
                .notice()
                .set(Some(AdminNotice::error("Livro não encontrado.")));
            return;
        };

        let patch = patch_from_form(&book, &form);
        if patch.is_empty() {
            self.admin
                .notice()
                .set(Some(AdminNotice::success("Nenhuma alteração para salvar.")));
            return;
        }

        let cover_only = patch == BookPatch::cover(form.cover_url.trim());
        if cover_only {
            self.run_write(
                "Capa atualizada!",
                self.sync.update_book_cover(&id, form.cover_url.trim()),
            )
            .await;
        } else {
            self.run_write("Livro atualizado!", self.sync.update_book(&id, patch))
                .await;
        }
    }

    pub async fn remove_book(&self, id: String) {
        self.run_write("Livro removido.", self.sync.remove_book(&id))
            .await;
    }

    pub async fn add_banner(&self, form: BannerForm) {
        self.run_write(
            "Banner adicionado!",
            self.sync
                .add_banner(&form.image_url, &form.link_url, form.position),
        )
        .await;
    }

    pub async fn remove_banner(&self, id: String) {
        self.run_write("Banner removido.", self.sync.remove_banner(&id))
            .await;
    }

    pub async fn add_release(&self, form: ReleaseForm) {
        self.run_write(
            "Lançamento anunciado!",
            self.sync.add_release(
                &form.title,
                &form.description,
                &form.date,
                &form.image_url,
            ),
        )
        .await;
    }

    pub async fn remove_release(&self, id: String) {
        self.run_write("Lançamento removido.", self.sync.remove_release(&id))
            .await;
    }

    pub async fn update_author_photo(&self, url: String) {
        self.run_write("Foto atualizada!", self.sync.update_author_photo(&url))
            .await;
    }

    // =========================================================================
    // Visitors
    // =========================================================================

    pub async fn subscribe(&self, email: String) {
        self.site.newsletter().set(NewsletterStatus::Sending);

        match self.newsletter.subscribe(&email).await {
            Ok(()) => {
                self.site.newsletter().set(NewsletterStatus::Subscribed);
                sleep_ms(NEWSLETTER_THANKS_MS).await;
                self.site.newsletter().set(NewsletterStatus::Idle);
            }
            Err(e) => {
                warn!("Newsletter sign-up failed: {}", e);
                let message = match e {
                    NewsletterError::InvalidEmail => "Informe um e-mail válido.",
                    _ => "Não foi possível concluir a inscrição. Tente novamente.",
                };
                self.site
                    .newsletter()
                    .set(NewsletterStatus::Failed(message.to_string()));
            }
        }
    }

    pub fn set_online(&self, online: bool) {
        info!("Browser is {}", if online { "online" } else { "offline" });
        self.site.online().set(online);
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn new_book_from_form(form: BookForm) -> NewBook {
    NewBook {
        title: form.title.trim().to_string(),
        books2read_url: form.books2read_url.trim().to_string(),
        amazon_url: optional(&form.amazon_url),
        amazon_ebook_url: optional(&form.amazon_ebook_url),
        draft_book_url: optional(&form.draft_book_url),
        cover_url: optional(&form.cover_url),
        short_synopsis: form.short_synopsis.trim().to_string(),
        full_synopsis: form.full_synopsis.trim().to_string(),
        first_chapter_markdown: form.first_chapter_markdown.trim().to_string(),
    }
}

/// Only the fields the form actually changed.
pub fn patch_from_form(book: &Book, form: &BookForm) -> BookPatch {
    fn text(current: &str, edited: &str) -> Option<String> {
        let edited = edited.trim();
        (edited != current).then(|| edited.to_string())
    }
    fn link(current: &Option<String>, edited: &str) -> Option<Option<String>> {
        let edited = optional(edited);
        (edited != *current).then_some(edited)
    }

    BookPatch {
        title: text(&book.title, &form.title),
        books2read_url: text(&book.books2read_url, &form.books2read_url),
        amazon_url: link(&book.amazon_url, &form.amazon_url),
        amazon_ebook_url: link(&book.amazon_ebook_url, &form.amazon_ebook_url),
        draft_book_url: link(&book.draft_book_url, &form.draft_book_url),
        cover_url: text(&book.cover_url, &form.cover_url),
        short_synopsis: text(&book.short_synopsis, &form.short_synopsis),
        full_synopsis: text(&book.full_synopsis, &form.full_synopsis),
        first_chapter_markdown: text(&book.first_chapter_markdown, &form.first_chapter_markdown),
    }
}

/// Copy a catalog into the store views read from.
fn publish_into(mut store: Store<CatalogState>, catalog: &Catalog, offline_mode: bool) {
    store.set(CatalogState {
        books: catalog.books.clone(),
        banners: catalog.banners.clone(),
        releases: catalog.releases.clone(),
        author_photo: catalog.author_photo.clone(),
        loading: catalog.loading,
        error: catalog.error.clone(),
        initialized: catalog.initialized,
        offline_mode,
    });
}

/// Panel message for a failed write
pub fn describe_error(error: &ContentError) -> String {
    match error {
        ContentError::Invalid(message) => message.clone(),
        ContentError::NotFound(_) => "Livro não encontrado.".to_string(),
        ContentError::Generator(e) => format!("Falha ao gerar os detalhes do livro: {e}"),
        ContentError::Remote(e) => format!("Falha ao salvar no banco de dados: {e}"),
        ContentError::Decode { .. } => "Resposta inesperada do banco de dados.".to_string(),
    }
}
