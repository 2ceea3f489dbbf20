pub mod env;
pub mod error;
pub mod http;
pub mod models;
pub mod storage;
pub mod types;

pub use env::{Environment, AI_BINDING, ARTICLES_KV_BINDING};
pub use error::{
    AiError, ArticleError, ArticleStep, EnvironmentError, Error, FeedError, HttpError, KvError,
    KvOperation, Result, ServiceError,
};
pub use http::{GetOptions, HttpClient};
pub use models::{InferenceModel, SUMMARY_UNAVAILABLE};
pub use storage::KvStore;
pub use types::{ArticleProcessingResult, ArticleSummary, ArticleWithEntry, FeedEntry, PageResult};
