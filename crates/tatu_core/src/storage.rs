use async_trait::async_trait;
use crate::error::KvError;

/// A string key-value namespace. A missing key is `Ok(None)`, never an error.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, KvError>;

    /// Last write wins.
    async fn put(&self, key: &str, value: &str) -> std::result::Result<(), KvError>;

    async fn delete(&self, key: &str) -> std::result::Result<(), KvError>;
}
