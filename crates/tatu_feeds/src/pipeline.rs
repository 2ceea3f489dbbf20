use std::sync::Arc;
use std::time::Duration;
use tatu_core::{ArticleError, ArticleSummary, GetOptions, HttpClient, InferenceModel, SUMMARY_UNAVAILABLE};
use tatu_storage::ArticleCache;
use tracing::{error, info, instrument, warn};

use crate::extract::parse_article_content;
use crate::runtime::Services;

pub const ARTICLE_FETCH_TIMEOUT: Duration = Duration::from_secs(15);
pub const ARTICLE_CACHE_TTL: Duration = Duration::from_secs(60 * 60 * 24);

/// Cache-aside processing of a single article URL.
pub struct ArticlePipeline {
    http: Arc<dyn HttpClient>,
    cache: ArticleCache,
    inference: Arc<dyn InferenceModel>,
}

impl ArticlePipeline {
    pub fn new(services: &Services) -> Self {
        Self {
            http: services.http.clone(),
            cache: services.cache.clone(),
            inference: services.inference.clone(),
        }
    }

    /// Only a failed fetch is returned as an error. Extraction, summary and
    /// cache-write problems are logged and absorbed.
    #[instrument(skip(self))]
    pub async fn process(&self, url: &str) -> Result<ArticleSummary, ArticleError> {
        let result = self.run(url).await;
        match &result {
            Ok(summary) => info!("✅ Processed article {}, has content: {}", url, summary.has_content()),
            Err(e) => error!("Failed to process article {}: {}", url, e),
        }
        result
    }

    async fn run(&self, url: &str) -> Result<ArticleSummary, ArticleError> {
        match self.cache.get_article_summary(url).await {
            Ok(Some(cached)) => {
                info!("⚡ Cache hit for article: {}", url);
                return Ok(cached);
            }
            Ok(None) => info!("Cache miss, fetching article: {}", url),
            Err(e) => warn!("Cache read failed for {}, treating as miss: {}", url, e),
        }

        let options = GetOptions::default()
            .with_timeout(ARTICLE_FETCH_TIMEOUT)
            .with_cache_ttl(ARTICLE_CACHE_TTL)
            .cache_everything();
        let html = self
            .http
            .get(url, &options)
            .await
            .map_err(|e| ArticleError::fetch(url, e))?;

        let content = parse_article_content(&html, url).unwrap_or_else(|e| {
            warn!("Failed to parse article {}: {}", url, e);
            None
        });

        let result = match content {
            Some(article) => {
                info!("📄 Parsed article: {}", url);
                let summary = self.summarize(&article, url).await;
                ArticleSummary {
                    article: Some(article),
                    summary: Some(summary),
                }
            }
            None => {
                warn!("No content extracted for article: {}", url);
                ArticleSummary::empty()
            }
        };

        if let Err(e) = self.cache.put_article_summary(url, &result).await {
            warn!("Failed to cache article summary for {}: {}", url, e);
        }

        Ok(result)
    }

    async fn summarize(&self, article: &str, url: &str) -> String {
        match self.inference.summarize(article, Some(url)).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("AI summarization failed for {}: {}", url, e);
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }
}
