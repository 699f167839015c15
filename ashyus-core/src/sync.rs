//! Content synchronization layer.
//!
//! Keeps a local [`Catalog`] of books, banners, releases and the author photo
//! that mirrors the remote tables. Reads happen once at startup; every
//! mutation writes to the remote store first and only touches local state when
//! that write succeeds. Without a remote store the layer runs offline: writes
//! apply locally and are reported as [`Persistence::LocalOnly`].
//!
//! There is no conflict resolution or queueing of offline writes. A failed
//! write leaves local state as it was.

use ashyus_common::{placeholder_cover_url, Banner, BannerPosition, Book, Release, DEFAULT_AUTHOR_PHOTO};
use chrono::Utc;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info, warn};

use crate::generator::{BookDetailsGenerator, GeneratorError};
use crate::remote::{Query, RemoteError, RemoteStore, Table};
use crate::rows::{
    decode_rows, encode_row, BannerRow, BookPatchRow, BookRow, ReleaseRow, SettingRow,
    AUTHOR_PHOTO_KEY,
};
use crate::seed;

/// Shown to visitors when the initial load fails
pub const CONNECTION_ERROR: &str =
    "Não foi possível conectar à biblioteca arcana (Banco de Dados).";

/// Local mirror of the site content
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub books: Vec<Book>,
    pub banners: Vec<Banner>,
    pub releases: Vec<Release>,
    pub author_photo: String,
    pub loading: bool,
    pub error: Option<String>,
    /// True once the first load attempt has finished, successful or not
    pub initialized: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            banners: Vec::new(),
            releases: Vec::new(),
            author_photo: DEFAULT_AUTHOR_PHOTO.to_string(),
            loading: true,
            error: None,
            initialized: false,
        }
    }
}

/// Where a successful write landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Stored in the remote store
    Remote,
    /// Offline mode: kept in memory only, lost on reload
    LocalOnly,
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error("malformed {table} rows: {message}")]
    Decode { table: &'static str, message: String },
    #[error("{0}")]
    Invalid(String),
    #[error("book not found: {0}")]
    NotFound(String),
}

/// Admin input for a new book. Empty text fields are generated when a
/// generator is available.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub books2read_url: String,
    pub amazon_url: Option<String>,
    pub amazon_ebook_url: Option<String>,
    pub draft_book_url: Option<String>,
    pub cover_url: Option<String>,
    pub short_synopsis: String,
    pub full_synopsis: String,
    pub first_chapter_markdown: String,
}

impl NewBook {
    fn validate(&self) -> Result<(), ContentError> {
        if self.title.trim().is_empty() {
            return Err(ContentError::Invalid("O título é obrigatório.".to_string()));
        }
        if self.books2read_url.trim().is_empty() {
            return Err(ContentError::Invalid(
                "O link Books2Read é obrigatório.".to_string(),
            ));
        }
        Ok(())
    }

    fn needs_generation(&self) -> bool {
        [
            &self.short_synopsis,
            &self.full_synopsis,
            &self.first_chapter_markdown,
        ]
        .iter()
        .any(|s| s.trim().is_empty())
    }
}

/// Partial book update. `None` leaves a field alone; for optional links
/// `Some(None)` clears the link.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub books2read_url: Option<String>,
    pub amazon_url: Option<Option<String>>,
    pub amazon_ebook_url: Option<Option<String>>,
    pub draft_book_url: Option<Option<String>>,
    pub cover_url: Option<String>,
    pub short_synopsis: Option<String>,
    pub full_synopsis: Option<String>,
    pub first_chapter_markdown: Option<String>,
}

impl BookPatch {
    pub fn cover(url: impl Into<String>) -> Self {
        Self {
            cover_url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn validate(&self) -> Result<(), ContentError> {
        let blank = |v: &Option<String>| v.as_deref().is_some_and(|s| s.trim().is_empty());
        if blank(&self.title) {
            return Err(ContentError::Invalid("O título é obrigatório.".to_string()));
        }
        if blank(&self.books2read_url) {
            return Err(ContentError::Invalid(
                "O link Books2Read é obrigatório.".to_string(),
            ));
        }
        if blank(&self.cover_url) {
            return Err(ContentError::Invalid("A capa precisa de uma URL.".to_string()));
        }
        Ok(())
    }

    pub fn apply_to(&self, book: &mut Book) {
        if let Some(v) = &self.title {
            book.title = v.clone();
        }
        if let Some(v) = &self.books2read_url {
            book.books2read_url = v.clone();
        }
        if let Some(v) = &self.amazon_url {
            book.amazon_url = v.clone();
        }
        if let Some(v) = &self.amazon_ebook_url {
            book.amazon_ebook_url = v.clone();
        }
        if let Some(v) = &self.draft_book_url {
            book.draft_book_url = v.clone();
        }
        if let Some(v) = &self.cover_url {
            book.cover_url = v.clone();
        }
        if let Some(v) = &self.short_synopsis {
            book.short_synopsis = v.clone();
        }
        if let Some(v) = &self.full_synopsis {
            book.full_synopsis = v.clone();
        }
        if let Some(v) = &self.first_chapter_markdown {
            book.first_chapter_markdown = v.clone();
        }
    }
}

fn require(value: &str, message: &str) -> Result<(), ContentError> {
    if value.trim().is_empty() {
        Err(ContentError::Invalid(message.to_string()))
    } else {
        Ok(())
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    table: Table,
    rows: Vec<serde_json::Value>,
) -> Result<Vec<T>, ContentError> {
    decode_rows(rows).map_err(|message| ContentError::Decode {
        table: table.name(),
        message,
    })
}

/// Called with the new catalog after every local change
pub type CatalogObserver = Box<dyn Fn(&Catalog)>;

/// Owns the catalog and talks to the remote store.
pub struct ContentSync {
    remote: Option<Arc<dyn RemoteStore>>,
    generator: Option<Arc<dyn BookDetailsGenerator>>,
    catalog: Mutex<Catalog>,
    last_id: Mutex<i64>,
    observer: Option<CatalogObserver>,
}

impl ContentSync {
    pub fn new(
        remote: Option<Arc<dyn RemoteStore>>,
        generator: Option<Arc<dyn BookDetailsGenerator>>,
    ) -> Self {
        Self {
            remote,
            generator,
            catalog: Mutex::new(Catalog::default()),
            last_id: Mutex::new(0),
            observer: None,
        }
    }

    /// Notify `observer` of every catalog change, including the loading flag
    /// and partial loads while an operation is still in flight.
    pub fn on_change(mut self, observer: impl Fn(&Catalog) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn is_offline(&self) -> bool {
        self.remote.is_none()
    }

    /// Copy of the current catalog
    pub fn snapshot(&self) -> Catalog {
        self.catalog().clone()
    }

    fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update(&self, f: impl FnOnce(&mut Catalog)) {
        let changed = {
            let mut catalog = self.catalog();
            f(&mut catalog);
            self.observer.as_ref().map(|_| catalog.clone())
        };
        if let (Some(observer), Some(catalog)) = (&self.observer, changed) {
            observer(&catalog);
        }
    }

    /// Epoch milliseconds as text, bumped when two IDs land in the same millisecond.
    fn next_id(&self) -> String {
        let mut last = self.last_id.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now().timestamp_millis();
        *last = now.max(*last + 1);
        last.to_string()
    }

    /// Run a remote write, or skip it when offline.
    async fn persist<'a, F, Fut>(&'a self, label: &str, op: F) -> Result<Persistence, ContentError>
    where
        F: FnOnce(&'a dyn RemoteStore) -> Fut,
        Fut: Future<Output = Result<(), RemoteError>>,
    {
        let Some(remote) = self.remote.as_deref() else {
            warn!("Offline mode: {} kept locally and will be lost on reload", label);
            return Ok(Persistence::LocalOnly);
        };

        match op(remote).await {
            Ok(()) => Ok(Persistence::Remote),
            Err(e) => {
                error!("Failed to {}: {}", label, e);
                Err(e.into())
            }
        }
    }

    /// Load everything from the remote store. Never fails: problems end up in
    /// `Catalog::error`, and `initialized` is set either way.
    pub async fn initialize(&self) {
        self.update(|c| {
            c.loading = true;
            c.error = None;
        });

        match self.remote.clone() {
            None => {
                warn!("Offline mode: remote store not configured, showing built-in catalog");
                let books = seed::initial_books();
                self.update(|c| c.books = books);
            }
            Some(remote) => {
                if let Err(e) = self.load_from(remote.as_ref()).await {
                    error!("Content load failed: {}", e);
                    self.update(|c| c.error = Some(CONNECTION_ERROR.to_string()));
                }
            }
        }

        self.update(|c| {
            c.loading = false;
            c.initialized = true;
        });
    }

    /// Each list is applied as soon as it arrives, so a later failure keeps earlier lists.
    async fn load_from(&self, remote: &dyn RemoteStore) -> Result<(), ContentError> {
        let rows = remote
            .select(Table::Books, &Query::all().newest_first())
            .await?;
        let books: Vec<Book> = decode::<BookRow>(Table::Books, rows)?
            .into_iter()
            .map(BookRow::into_book)
            .collect();
        let book_count = books.len();
        self.update(|c| c.books = books);

        let rows = remote.select(Table::Banners, &Query::all()).await?;
        let banners: Vec<Banner> = decode::<BannerRow>(Table::Banners, rows)?
            .into_iter()
            .filter_map(BannerRow::into_banner)
            .collect();
        let banner_count = banners.len();
        self.update(|c| c.banners = banners);

        let rows = remote
            .select(Table::Releases, &Query::all().newest_first())
            .await?;
        let releases: Vec<Release> = decode::<ReleaseRow>(Table::Releases, rows)?
            .into_iter()
            .map(ReleaseRow::into_release)
            .collect();
        let release_count = releases.len();
        self.update(|c| c.releases = releases);

        // The photo is optional: keep the default on any problem.
        match remote
            .select(
                Table::SiteSettings,
                &Query::all().eq("key", AUTHOR_PHOTO_KEY),
            )
            .await
        {
            Ok(rows) => {
                let photo = decode::<SettingRow>(Table::SiteSettings, rows)
                    .ok()
                    .and_then(|rows| rows.into_iter().next())
                    .and_then(|row| row.value)
                    .filter(|v| !v.trim().is_empty());
                if let Some(photo) = photo {
                    self.update(|c| c.author_photo = photo);
                }
            }
            Err(e) => warn!("Author photo not loaded: {}", e),
        }

        info!(
            "Loaded {} books, {} banners, {} releases",
            book_count, banner_count, release_count
        );
        Ok(())
    }

    /// Add a book, generating missing text when possible. The new book goes first.
    ///
    /// Any earlier error is cleared up front; a draft rejected by validation
    /// is returned without setting a new one.
    pub async fn add_book(&self, draft: NewBook) -> Result<Persistence, ContentError> {
        self.update(|c| c.error = None);
        draft.validate()?;

        self.update(|c| c.loading = true);

        let result = self.create_book(draft).await;

        self.update(|c| {
            c.loading = false;
            match &result {
                Ok((book, _)) => c.books.insert(0, book.clone()),
                Err(e) => c.error = Some(e.to_string()),
            }
        });

        result.map(|(_, persistence)| persistence)
    }

    async fn create_book(&self, draft: NewBook) -> Result<(Book, Persistence), ContentError> {
        let id = self.next_id();
        let mut draft = draft;

        if draft.needs_generation() {
            if let Some(generator) = &self.generator {
                let details = generator.generate(draft.title.trim()).await?;
                let fill = |field: &mut String, generated: String| {
                    if field.trim().is_empty() {
                        *field = generated;
                    }
                };
                fill(&mut draft.short_synopsis, details.short_synopsis);
                fill(&mut draft.full_synopsis, details.full_synopsis);
                fill(&mut draft.first_chapter_markdown, details.first_chapter_markdown);
            }
        }

        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        let book = Book {
            cover_url: non_empty(draft.cover_url).unwrap_or_else(|| placeholder_cover_url(&id)),
            id,
            title: draft.title.trim().to_string(),
            books2read_url: draft.books2read_url.trim().to_string(),
            amazon_url: non_empty(draft.amazon_url),
            amazon_ebook_url: non_empty(draft.amazon_ebook_url),
            draft_book_url: non_empty(draft.draft_book_url),
            short_synopsis: draft.short_synopsis,
            full_synopsis: draft.full_synopsis,
            first_chapter_markdown: draft.first_chapter_markdown,
            created_at: Utc::now(),
        };

        let row = encode_row(&BookRow::from_book(&book));
        let persistence = self
            .persist("add book", |r| r.insert(Table::Books, row))
            .await?;
        info!("Added book {} ({:?})", book.id, persistence);
        Ok((book, persistence))
    }

    pub async fn update_book(&self, id: &str, patch: BookPatch) -> Result<Persistence, ContentError> {
        patch.validate()?;
        let known = self.catalog().books.iter().any(|b| b.id == id);
        if !known {
            return Err(ContentError::NotFound(id.to_string()));
        }

        let row = encode_row(&BookPatchRow::from(&patch));
        let persistence = if patch.is_empty() {
            if self.is_offline() {
                Persistence::LocalOnly
            } else {
                Persistence::Remote
            }
        } else {
            self.persist("update book", |r| r.update(Table::Books, id, row))
                .await?
        };

        self.update(|c| {
            if let Some(book) = c.books.iter_mut().find(|b| b.id == id) {
                patch.apply_to(book);
            }
        });
        Ok(persistence)
    }

    pub async fn update_book_cover(
        &self,
        id: &str,
        cover_url: impl Into<String>,
    ) -> Result<Persistence, ContentError> {
        self.update_book(id, BookPatch::cover(cover_url)).await
    }

    pub async fn remove_book(&self, id: &str) -> Result<Persistence, ContentError> {
        let persistence = self
            .persist("remove book", |r| r.delete(Table::Books, id))
            .await?;
        self.update(|c| c.books.retain(|b| b.id != id));
        Ok(persistence)
    }

    /// Add a banner to the end of its sidebar.
    pub async fn add_banner(
        &self,
        image_url: &str,
        link_url: &str,
        position: BannerPosition,
    ) -> Result<Persistence, ContentError> {
        require(image_url, "Selecione uma imagem para o banner.")?;
        require(link_url, "O banner precisa de um link.")?;

        let banner = Banner {
            id: self.next_id(),
            image_url: image_url.trim().to_string(),
            link_url: link_url.trim().to_string(),
            position,
            created_at: Utc::now(),
        };
        let row = encode_row(&BannerRow::from_banner(&banner));
        let persistence = self
            .persist("add banner", |r| r.insert(Table::Banners, row))
            .await?;
        self.update(|c| c.banners.push(banner));
        Ok(persistence)
    }

    pub async fn remove_banner(&self, id: &str) -> Result<Persistence, ContentError> {
        let persistence = self
            .persist("remove banner", |r| r.delete(Table::Banners, id))
            .await?;
        self.update(|c| c.banners.retain(|b| b.id != id));
        Ok(persistence)
    }

    /// Announce an upcoming book. The newest announcement goes first.
    pub async fn add_release(
        &self,
        title: &str,
        description: &str,
        date: &str,
        image_url: &str,
    ) -> Result<Persistence, ContentError> {
        require(title, "O lançamento precisa de um título.")?;
        require(image_url, "Selecione uma imagem para o lançamento.")?;

        let release = Release {
            id: self.next_id(),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            image_url: image_url.trim().to_string(),
            date: date.trim().to_string(),
        };
        let row = encode_row(&ReleaseRow::from_release(&release));
        let persistence = self
            .persist("add release", |r| r.insert(Table::Releases, row))
            .await?;
        self.update(|c| c.releases.insert(0, release));
        Ok(persistence)
    }

    pub async fn remove_release(&self, id: &str) -> Result<Persistence, ContentError> {
        let persistence = self
            .persist("remove release", |r| r.delete(Table::Releases, id))
            .await?;
        self.update(|c| c.releases.retain(|r| r.id != id));
        Ok(persistence)
    }

    pub async fn update_author_photo(&self, url: &str) -> Result<Persistence, ContentError> {
        require(url, "A foto precisa de uma URL.")?;
        let url = url.trim().to_string();

        let row = encode_row(&SettingRow {
            key: AUTHOR_PHOTO_KEY.to_string(),
            value: Some(url.clone()),
        });
        let persistence = self
            .persist("save author photo", |r| r.upsert(Table::SiteSettings, row))
            .await?;
        self.update(|c| c.author_photo = url);
        Ok(persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GeneratedDetails;
    use crate::remote::MemoryStore;
    use async_trait::async_trait;
    use serde_json::json;

    struct FixedGenerator;

    #[async_trait]
    impl BookDetailsGenerator for FixedGenerator {
        async fn generate(&self, title: &str) -> Result<GeneratedDetails, GeneratorError> {
            Ok(GeneratedDetails {
                short_synopsis: format!("curta: {title}"),
                full_synopsis: "completa".to_string(),
                first_chapter_markdown: "## Capítulo 1".to_string(),
            })
        }
    }

    struct BrokenGenerator;

    #[async_trait]
    impl BookDetailsGenerator for BrokenGenerator {
        async fn generate(&self, _title: &str) -> Result<GeneratedDetails, GeneratorError> {
            Err(GeneratorError::Empty)
        }
    }

    fn draft(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            books2read_url: "https://books2read.com/x".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_catalog_is_loading_with_default_photo() {
        let catalog = Catalog::default();
        assert!(catalog.loading);
        assert!(!catalog.initialized);
        assert_eq!(catalog.author_photo, DEFAULT_AUTHOR_PHOTO);
    }

    #[test]
    fn ids_are_unique_within_a_millisecond() {
        let sync = ContentSync::new(None, None);
        let a: i64 = sync.next_id().parse().unwrap();
        let b: i64 = sync.next_id().parse().unwrap();
        assert!(b > a);
    }

    #[test]
    fn patch_applies_only_set_fields() {
        let mut book = seed::initial_books().remove(0);
        let original_title = book.title.clone();
        BookPatch {
            amazon_url: Some(None),
            short_synopsis: Some("nova".into()),
            ..Default::default()
        }
        .apply_to(&mut book);
        assert_eq!(book.title, original_title);
        assert_eq!(book.amazon_url, None);
        assert_eq!(book.short_synopsis, "nova");
    }

    #[tokio::test]
    async fn offline_initialize_seeds_catalog() {
        let sync = ContentSync::new(None, None);
        sync.initialize().await;

        let catalog = sync.snapshot();
        assert!(catalog.initialized);
        assert!(!catalog.loading);
        assert_eq!(catalog.error, None);
        assert_eq!(catalog.books.len(), 2);
        assert_eq!(catalog.books[0].id, "static-1");
    }

    #[tokio::test]
    async fn offline_writes_are_local_only() {
        let sync = ContentSync::new(None, None);
        let persistence = sync
            .add_banner("img", "https://parceiro", BannerPosition::Left)
            .await
            .unwrap();
        assert_eq!(persistence, Persistence::LocalOnly);
        assert_eq!(sync.snapshot().banners.len(), 1);
    }

    #[tokio::test]
    async fn generator_fills_only_missing_text() {
        let sync = ContentSync::new(None, Some(Arc::new(FixedGenerator)));
        let mut new_book = draft("Runa");
        new_book.full_synopsis = "escrita pelo autor".to_string();

        sync.add_book(new_book).await.unwrap();

        let book = &sync.snapshot().books[0];
        assert_eq!(book.short_synopsis, "curta: Runa");
        assert_eq!(book.full_synopsis, "escrita pelo autor");
        assert_eq!(book.first_chapter_markdown, "## Capítulo 1");
        assert_eq!(book.cover_url, placeholder_cover_url(&book.id));
    }

    #[tokio::test]
    async fn generator_failure_aborts_add_and_sets_error() {
        let sync = ContentSync::new(None, Some(Arc::new(BrokenGenerator)));
        let result = sync.add_book(draft("Runa")).await;

        assert!(matches!(result, Err(ContentError::Generator(_))));
        let catalog = sync.snapshot();
        assert!(catalog.books.is_empty());
        assert!(catalog.error.is_some());
        assert!(!catalog.loading);
    }

    #[tokio::test]
    async fn observer_sees_loading_while_add_is_in_flight() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let sync = ContentSync::new(None, Some(Arc::new(FixedGenerator))).on_change(move |c| {
            recorder
                .lock()
                .unwrap()
                .push((c.loading, c.books.len()));
        });

        sync.initialize().await;
        seen.lock().unwrap().clear();
        sync.add_book(draft("Runa")).await.unwrap();

        let seen = seen.lock().unwrap().clone();
        assert!(seen.contains(&(true, 2)));
        assert_eq!(seen.last(), Some(&(false, 3)));
    }

    #[tokio::test]
    async fn rejected_add_clears_earlier_error() {
        let sync = ContentSync::new(None, Some(Arc::new(BrokenGenerator)));
        assert!(sync.add_book(draft("Runa")).await.is_err());
        assert!(sync.snapshot().error.is_some());

        assert!(matches!(
            sync.add_book(draft("")).await,
            Err(ContentError::Invalid(_))
        ));
        let catalog = sync.snapshot();
        assert_eq!(catalog.error, None);
        assert!(!catalog.loading);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_any_write() {
        let store = Arc::new(MemoryStore::new());
        let sync = ContentSync::new(Some(store.clone()), None);

        assert!(matches!(
            sync.add_book(draft("  ")).await,
            Err(ContentError::Invalid(_))
        ));
        assert!(matches!(
            sync.add_release("Novo", "", "2025", "").await,
            Err(ContentError::Invalid(_))
        ));
        assert!(store.rows(Table::Books).is_empty());
        assert!(store.rows(Table::Releases).is_empty());
    }

    #[tokio::test]
    async fn update_unknown_book_is_not_found() {
        let sync = ContentSync::new(Some(Arc::new(MemoryStore::new())), None);
        assert!(matches!(
            sync.update_book_cover("missing", "https://capa").await,
            Err(ContentError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn author_photo_falls_back_when_setting_is_blank() {
        let store = MemoryStore::new().with_rows(
            Table::SiteSettings,
            vec![json!({"key": "author_photo", "value": ""})],
        );
        let sync = ContentSync::new(Some(Arc::new(store)), None);
        sync.initialize().await;
        assert_eq!(sync.snapshot().author_photo, DEFAULT_AUTHOR_PHOTO);
    }
}
