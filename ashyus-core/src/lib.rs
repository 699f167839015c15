pub mod admin;
pub mod config;
pub mod generator;
pub mod newsletter;
pub mod remote;
pub mod rows;
pub mod seed;
pub mod sync;

pub use admin::{AdminCredentials, AdminError};
pub use config::{ConfigError, RemoteConfig, SiteConfig};
pub use generator::{BookDetailsGenerator, GeminiGenerator, GeneratedDetails, GeneratorError};
pub use newsletter::{NewsletterClient, NewsletterError};
pub use remote::{MemoryStore, RemoteError, RemoteStore, RestStore};
pub use sync::{
    BookPatch, Catalog, ContentError, ContentSync, NewBook, Persistence, CONNECTION_ERROR,
};
