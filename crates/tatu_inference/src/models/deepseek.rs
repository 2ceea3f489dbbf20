use async_trait::async_trait;
use tatu_core::{AiError, Error, InferenceModel, Result, SUMMARY_UNAVAILABLE};
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Only the presence of an API key is checked; the key itself is not kept
/// until the chat-completions call is wired up.
#[derive(Debug)]
pub struct DeepSeekModel {
    base_url: String,
}

impl DeepSeekModel {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let has_key = api_key.is_some_and(|key| !key.trim().is_empty());
        if !has_key {
            return Err(Error::Inference(
                "DeepSeek requires an API key (set DEEPSEEK_API_KEY)".to_string(),
            ));
        }

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl InferenceModel for DeepSeekModel {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    // The chat-completions call is not wired up yet; callers always get the
    // placeholder text.
    async fn summarize(&self, content: &str, url: Option<&str>) -> std::result::Result<String, AiError> {
        info!(
            "🧠 Summarizing {} chars from {} via {}",
            content.len(),
            url.unwrap_or("<unknown>"),
            self.base_url
        );
        Ok(SUMMARY_UNAVAILABLE.to_string())
    }

    fn is_available(&self) -> bool {
        true
    }
}
