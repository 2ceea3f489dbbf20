use async_trait::async_trait;
use std::fmt;
use crate::error::AiError;

/// Text returned whenever no real summary can be produced.
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable.";

#[async_trait]
pub trait InferenceModel: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Summarize sanitized article content. `url` is only used for logging.
    async fn summarize(&self, content: &str, url: Option<&str>) -> std::result::Result<String, AiError>;

    /// Reports whether a real summarization capability is configured.
    fn is_available(&self) -> bool;
}
