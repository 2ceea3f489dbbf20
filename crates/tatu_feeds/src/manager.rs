use futures::future::join_all;
use std::ops::Range;
use tatu_core::{ArticleProcessingResult, ArticleWithEntry, FeedEntry, FeedError, PageResult};
use tokio::sync::Semaphore;
use tracing::{error, info, instrument};

use crate::feeds::{FeedFetcher, FeedSource};
use crate::pipeline::ArticlePipeline;
use crate::runtime::Services;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_CONCURRENCY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSettings {
    pub page_size: usize,
    /// Maximum number of articles processed at once within a page.
    pub concurrency: usize,
}

impl PageSettings {
    pub fn new(page_size: usize, concurrency: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            concurrency: concurrency.max(1),
        }
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_CONCURRENCY)
    }
}

pub struct FeedManager {
    fetcher: FeedFetcher,
    pipeline: ArticlePipeline,
    settings: PageSettings,
}

impl FeedManager {
    pub fn new(services: &Services, settings: PageSettings) -> Self {
        Self {
            fetcher: FeedFetcher::new(services.http.clone()),
            pipeline: ArticlePipeline::new(services),
            settings,
        }
    }

    pub fn settings(&self) -> PageSettings {
        self.settings
    }

    pub async fn render(&self, source: FeedSource, page: usize) -> Result<PageResult, FeedError> {
        self.render_page(source, page, self.settings.page_size).await
    }

    /// Fetch `source` and process one page of it.
    ///
    /// Only a feed failure is an error. Every entry on the page gets exactly
    /// one result, in feed order; a page past the end is empty and triggers
    /// no article work.
    #[instrument(skip(self), fields(feed = source.name()))]
    pub async fn render_page(&self, source: FeedSource, page: usize, page_size: usize) -> Result<PageResult, FeedError> {
        let page = page.max(1);
        let page_size = page_size.max(1);

        let entries = self.fetcher.fetch(source).await.map_err(|e| {
            error!("Page {} of {} failed: {}", page, source.name(), e);
            e
        })?;

        let total_items = entries.len();
        let total_pages = total_items.div_ceil(page_size);
        let page_entries = &entries[page_bounds(page, page_size, total_items)];

        let semaphore = Semaphore::new(self.settings.concurrency.max(1));
        let futures: Vec<_> = page_entries
            .iter()
            .map(|entry| {
                let semaphore = &semaphore;
                async move {
                    let result = match semaphore.acquire().await {
                        Ok(_permit) => self.process_entry(entry).await,
                        Err(e) => ArticleProcessingResult::Failure { error: e.to_string() },
                    };
                    ArticleWithEntry {
                        entry: entry.clone(),
                        result,
                    }
                }
            })
            .collect();

        let results = join_all(futures).await;
        info!(
            "✨ Processed {} articles on page {}/{} of {}",
            results.len(),
            page,
            total_pages,
            source.name()
        );

        Ok(PageResult {
            results,
            total_items,
            total_pages,
            current_page: page,
        })
    }

    async fn process_entry(&self, entry: &FeedEntry) -> ArticleProcessingResult {
        match self.pipeline.process(&entry.link).await {
            Ok(data) => ArticleProcessingResult::Success { data },
            Err(e) => ArticleProcessingResult::Failure { error: e.message },
        }
    }
}

/// Index range of `page` (1-based), clamped to `total`.
pub fn page_bounds(page: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);
    start..end
}
