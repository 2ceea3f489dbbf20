use std::fmt;
use std::sync::Arc;
use tatu_core::{Environment, EnvironmentError, HttpClient, InferenceModel, KvStore, ARTICLES_KV_BINDING};
use tatu_storage::ArticleCache;
use tracing::debug;

/// Service graph for one request, resolved from an [`Environment`].
#[derive(Clone)]
pub struct Services {
    pub http: Arc<dyn HttpClient>,
    pub cache: ArticleCache,
    pub inference: Arc<dyn InferenceModel>,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("http", &"<dyn HttpClient>")
            .field("cache", &self.cache)
            .field("inference", &self.inference.name())
            .finish()
    }
}

impl Services {
    pub fn new(http: Arc<dyn HttpClient>, store: Arc<dyn KvStore>, inference: Arc<dyn InferenceModel>) -> Self {
        Self {
            http,
            cache: ArticleCache::new(store),
            inference,
        }
    }

    /// Both the article KV namespace and the AI binding must be present.
    pub fn from_environment(env: &Environment, http: Arc<dyn HttpClient>) -> Result<Self, EnvironmentError> {
        let store = env.get_kv(ARTICLES_KV_BINDING)?;
        let inference = env.get_ai()?;
        if !inference.is_available() {
            debug!("Summarizer {} has no backing capability, summaries will be placeholders", inference.name());
        }
        Ok(Self::new(http, store, inference))
    }
}
