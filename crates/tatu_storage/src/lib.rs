use std::path::Path;
use std::sync::Arc;
use tatu_core::{Error, KvStore, Result};

pub mod backends;
pub mod cache;

pub use backends::*;
pub use cache::{ArticleCache, KvFormat, KvValue};

pub const DEFAULT_DB_PATH: &str = "articles.db";

/// Build a KV namespace by backend name.
pub async fn create_storage(kind: &str, db_path: Option<&Path>) -> Result<Arc<dyn KvStore>> {
    match kind {
        "memory" => {
            tracing::info!("📦 Using in-memory article cache");
            Ok(Arc::new(InMemoryStorage::new()))
        }
        #[cfg(feature = "sqlite")]
        "sqlite" => {
            let path = db_path.unwrap_or_else(|| Path::new(DEFAULT_DB_PATH));
            tracing::info!("📦 Using SQLite article cache at {}", path.display());
            Ok(Arc::new(SqliteStorage::new_with_path(path).await?))
        }
        #[cfg(not(feature = "sqlite"))]
        "sqlite" => {
            let _ = db_path;
            Err(Error::Storage("SQLite support not compiled in (enable the `sqlite` feature)".to_string()))
        }
        other => Err(Error::Storage(format!("Unknown storage backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::cache::*;
    pub use super::create_storage;
}
