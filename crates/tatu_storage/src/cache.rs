use serde_json::Value;
use std::sync::Arc;
use tatu_core::{ArticleSummary, KvError, KvOperation, KvStore};

/// How a stored value should be decoded on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KvValue {
    Text(String),
    Json(Value),
}

impl KvValue {
    fn encode(self) -> String {
        match self {
            KvValue::Text(text) => text,
            KvValue::Json(value) => value.to_string(),
        }
    }
}

impl From<String> for KvValue {
    fn from(text: String) -> Self {
        KvValue::Text(text)
    }
}

impl From<&str> for KvValue {
    fn from(text: &str) -> Self {
        KvValue::Text(text.to_string())
    }
}

impl From<Value> for KvValue {
    fn from(value: Value) -> Self {
        KvValue::Json(value)
    }
}

/// Typed view over the article namespace: key = article URL, value = JSON
/// [`ArticleSummary`].
#[derive(Clone)]
pub struct ArticleCache {
    store: Arc<dyn KvStore>,
}

impl std::fmt::Debug for ArticleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArticleCache").finish_non_exhaustive()
    }
}

impl ArticleCache {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, key: &str, format: KvFormat) -> Result<Option<KvValue>, KvError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };

        match format {
            KvFormat::Text => Ok(Some(KvValue::Text(raw))),
            KvFormat::Json => serde_json::from_str(&raw)
                .map(|value| Some(KvValue::Json(value)))
                .map_err(|e| KvError::new(KvOperation::Get, key, e)),
        }
    }

    pub async fn put(&self, key: &str, value: impl Into<KvValue>) -> Result<(), KvError> {
        self.store.put(key, &value.into().encode()).await
    }

    pub async fn delete(&self, key: &str) -> Result<(), KvError> {
        self.store.delete(key).await
    }

    pub async fn get_article_summary(&self, url: &str) -> Result<Option<ArticleSummary>, KvError> {
        match self.get(url, KvFormat::Json).await? {
            Some(KvValue::Json(value)) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| KvError::new(KvOperation::Get, url, e)),
            _ => Ok(None),
        }
    }

    pub async fn put_article_summary(&self, url: &str, summary: &ArticleSummary) -> Result<(), KvError> {
        let value = serde_json::to_value(summary).map_err(|e| KvError::new(KvOperation::Put, url, e))?;
        self.put(url, value).await
    }
}
