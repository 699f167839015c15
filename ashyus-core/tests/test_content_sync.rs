use ashyus_common::{BannerPosition, DEFAULT_AUTHOR_PHOTO};
use ashyus_core::remote::Table;
use ashyus_core::{
    BookPatch, ContentError, ContentSync, MemoryStore, NewBook, Persistence, RemoteStore,
    CONNECTION_ERROR,
};
use serde_json::json;
use std::sync::Arc;

fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_rows(
            Table::Books,
            vec![
                json!({
                    "id": "1",
                    "title": "Antigo",
                    "books2read_url": "https://books2read.com/antigo",
                    "cover_url": "https://capas/antigo.png",
                    "created_at": "2024-01-01T00:00:00Z"
                }),
                json!({
                    "id": 2,
                    "title": "Recente",
                    "books2read_url": "https://books2read.com/recente",
                    "amazon_url": "",
                    "created_at": "2025-06-01T00:00:00Z"
                }),
            ],
        )
        .with_rows(
            Table::Banners,
            vec![
                json!({"id": "b1", "image_url": "https://img/1", "link_url": "https://l/1", "position": "left"}),
                json!({"id": "b2", "image_url": "https://img/2", "link_url": "https://l/2", "position": "top"}),
                json!({"id": "b3", "image_url": "https://img/3", "link_url": "https://l/3", "position": "right"}),
            ],
        )
        .with_rows(
            Table::Releases,
            vec![json!({
                "id": "r1",
                "title": "A Torre",
                "description": "Em breve",
                "image_url": "https://img/torre",
                "date_text": "Dezembro 2025",
                "created_at": "2025-01-01T00:00:00Z"
            })],
        )
        .with_rows(
            Table::SiteSettings,
            vec![json!({"key": "author_photo", "value": "https://img/autor.jpg"})],
        )
}

async fn initialized(store: Arc<MemoryStore>) -> ContentSync {
    tracing_init();
    let sync = ContentSync::new(Some(store), None);
    sync.initialize().await;
    sync
}

#[tokio::test]
async fn initialize_loads_every_table() {
    let sync = initialized(Arc::new(seeded_store())).await;
    let catalog = sync.snapshot();

    assert!(catalog.initialized);
    assert!(!catalog.loading);
    assert_eq!(catalog.error, None);

    let titles: Vec<&str> = catalog.books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Recente", "Antigo"]);
    assert_eq!(catalog.books[0].id, "2");
    assert_eq!(catalog.books[0].amazon_url, None);

    // The banner with an unknown position is dropped.
    assert_eq!(catalog.banners.len(), 2);
    let positions: Vec<BannerPosition> = catalog.banners.iter().map(|b| b.position).collect();
    assert_eq!(positions, [BannerPosition::Left, BannerPosition::Right]);

    assert_eq!(catalog.releases.len(), 1);
    assert_eq!(catalog.releases[0].date, "Dezembro 2025");
    assert_eq!(catalog.author_photo, "https://img/autor.jpg");
}

#[tokio::test]
async fn initialize_failure_reports_connection_error() {
    let sync = initialized(Arc::new(MemoryStore::failing("indisponível"))).await;
    let catalog = sync.snapshot();

    assert!(catalog.initialized);
    assert!(!catalog.loading);
    assert_eq!(catalog.error.as_deref(), Some(CONNECTION_ERROR));
    assert!(catalog.books.is_empty());
    assert_eq!(catalog.author_photo, DEFAULT_AUTHOR_PHOTO);
}

#[tokio::test]
async fn null_columns_do_not_fail_the_load() {
    let store = MemoryStore::new()
        .with_rows(
            Table::Banners,
            vec![
                json!({"id": "b1", "image_url": "https://img/1", "link_url": "https://l/1", "position": "left"}),
                json!({"id": "b2", "image_url": "https://img/2", "link_url": "https://l/2", "position": null}),
            ],
        )
        .with_rows(
            Table::Releases,
            vec![json!({
                "id": "r1",
                "title": "A Torre",
                "description": null,
                "image_url": "https://img/torre",
                "date_text": "2026"
            })],
        );
    let sync = initialized(Arc::new(store)).await;
    let catalog = sync.snapshot();

    assert_eq!(catalog.error, None);
    assert_eq!(catalog.banners.len(), 1);
    assert_eq!(catalog.banners[0].id, "b1");
    assert_eq!(catalog.releases.len(), 1);
    assert_eq!(catalog.releases[0].description, "");
}

#[tokio::test]
async fn book_lifecycle_writes_through() {
    let store = Arc::new(MemoryStore::new());
    let sync = initialized(store.clone()).await;

    let persistence = sync
        .add_book(NewBook {
            title: "Runa".into(),
            books2read_url: "https://books2read.com/runa".into(),
            short_synopsis: "curta".into(),
            full_synopsis: "longa".into(),
            first_chapter_markdown: "# Um".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(persistence, Persistence::Remote);

    let id = sync.snapshot().books[0].id.clone();
    assert_eq!(store.rows(Table::Books)[0]["title"], "Runa");

    sync.update_book(
        &id,
        BookPatch {
            title: Some("Runa Eterna".into()),
            amazon_url: Some(Some("https://amazon/runa".into())),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    sync.update_book_cover(&id, "https://capas/nova.png")
        .await
        .unwrap();

    let book = sync.snapshot().books[0].clone();
    assert_eq!(book.title, "Runa Eterna");
    assert_eq!(book.cover_url, "https://capas/nova.png");
    assert_eq!(book.primary_store_link(), Some("https://amazon/runa"));

    let row = &store.rows(Table::Books)[0];
    assert_eq!(row["title"], "Runa Eterna");
    assert_eq!(row["cover_url"], "https://capas/nova.png");

    sync.remove_book(&id).await.unwrap();
    assert!(sync.snapshot().books.is_empty());
    assert!(store.rows(Table::Books).is_empty());
}

#[tokio::test]
async fn banners_append_and_releases_prepend() {
    let store = Arc::new(MemoryStore::new());
    let sync = initialized(store.clone()).await;

    sync.add_banner("https://img/a", "https://l/a", BannerPosition::Left)
        .await
        .unwrap();
    sync.add_banner("https://img/b", "https://l/b", BannerPosition::Right)
        .await
        .unwrap();
    sync.add_release("Primeiro", "", "2025", "https://img/p")
        .await
        .unwrap();
    sync.add_release("Segundo", "", "2026", "https://img/s")
        .await
        .unwrap();

    let catalog = sync.snapshot();
    assert_eq!(catalog.banners[0].image_url, "https://img/a");
    assert_eq!(catalog.banners[1].image_url, "https://img/b");
    assert_eq!(catalog.releases[0].title, "Segundo");
    assert_eq!(catalog.releases[1].title, "Primeiro");
    assert_eq!(store.rows(Table::Banners)[1]["position"], "right");
    assert_eq!(store.rows(Table::Releases)[0]["date_text"], "2025");

    let banner_id = catalog.banners[0].id.clone();
    let release_id = catalog.releases[0].id.clone();
    sync.remove_banner(&banner_id).await.unwrap();
    sync.remove_release(&release_id).await.unwrap();

    let catalog = sync.snapshot();
    assert_eq!(catalog.banners.len(), 1);
    assert_eq!(catalog.releases.len(), 1);
    assert_eq!(store.rows(Table::Banners).len(), 1);
    assert_eq!(store.rows(Table::Releases).len(), 1);
}

#[tokio::test]
async fn author_photo_is_upserted_by_key() {
    let store = Arc::new(seeded_store());
    let sync = initialized(store.clone()).await;

    sync.update_author_photo("https://img/nova.jpg").await.unwrap();
    sync.update_author_photo("https://img/outra.jpg").await.unwrap();

    assert_eq!(sync.snapshot().author_photo, "https://img/outra.jpg");
    let settings = store.rows(Table::SiteSettings);
    assert_eq!(settings.len(), 1);
    assert_eq!(settings[0]["value"], "https://img/outra.jpg");
}

/// Store that reads fine but rejects every write.
struct ReadOnlyStore(MemoryStore);

#[async_trait::async_trait]
impl RemoteStore for ReadOnlyStore {
    async fn select(
        &self,
        table: Table,
        query: &ashyus_core::remote::Query,
    ) -> Result<Vec<serde_json::Value>, ashyus_core::RemoteError> {
        self.0.select(table, query).await
    }

    async fn insert(&self, _: Table, _: serde_json::Value) -> Result<(), ashyus_core::RemoteError> {
        Err(denied())
    }

    async fn update(
        &self,
        _: Table,
        _: &str,
        _: serde_json::Value,
    ) -> Result<(), ashyus_core::RemoteError> {
        Err(denied())
    }

    async fn delete(&self, _: Table, _: &str) -> Result<(), ashyus_core::RemoteError> {
        Err(denied())
    }

    async fn upsert(&self, _: Table, _: serde_json::Value) -> Result<(), ashyus_core::RemoteError> {
        Err(denied())
    }
}

fn denied() -> ashyus_core::RemoteError {
    ashyus_core::RemoteError::Status {
        status: 401,
        message: "permission denied".into(),
    }
}

#[tokio::test]
async fn failed_writes_leave_catalog_unchanged() {
    tracing_init();
    let sync = ContentSync::new(Some(Arc::new(ReadOnlyStore(seeded_store()))), None);
    sync.initialize().await;
    let before = sync.snapshot();

    assert!(matches!(
        sync.remove_book("1").await,
        Err(ContentError::Remote(_))
    ));
    assert!(sync
        .update_book_cover("1", "https://capas/x.png")
        .await
        .is_err());
    assert!(sync
        .add_banner("https://img/x", "https://l/x", BannerPosition::Left)
        .await
        .is_err());
    assert!(sync.remove_release("r1").await.is_err());
    assert!(sync.update_author_photo("https://img/x.jpg").await.is_err());

    assert_eq!(sync.snapshot(), before);

    // A failed add_book is the one write that surfaces in the catalog error.
    let result = sync
        .add_book(NewBook {
            title: "Runa".into(),
            books2read_url: "https://books2read.com/runa".into(),
            ..Default::default()
        })
        .await;
    assert!(result.is_err());
    let after = sync.snapshot();
    assert_eq!(after.books, before.books);
    assert!(after.error.is_some());
    assert!(!after.loading);
}
