pub mod extract;
pub mod feeds;
pub mod http;
pub mod logging;
pub mod manager;
pub mod pipeline;
pub mod runtime;

#[cfg(test)]
pub(crate) mod test_utils;

pub use extract::{parse_article_content, ArticleCleaner};
pub use feeds::{parse_feed, FeedFetcher, FeedSource};
pub use http::ReqwestClient;
pub use logging::init_logging;
pub use manager::{FeedManager, PageSettings, DEFAULT_CONCURRENCY, DEFAULT_PAGE_SIZE};
pub use pipeline::ArticlePipeline;
pub use runtime::Services;

pub mod prelude {
    pub use super::feeds::{FeedFetcher, FeedSource};
    pub use super::http::ReqwestClient;
    pub use super::manager::{FeedManager, PageSettings};
    pub use super::pipeline::ArticlePipeline;
    pub use super::runtime::Services;
    pub use tatu_core::{ArticleProcessingResult, ArticleSummary, ArticleWithEntry, FeedEntry, PageResult};
}
