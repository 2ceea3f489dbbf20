use std::fmt;
use tatu_core::{AiError, InferenceModel, SUMMARY_UNAVAILABLE};

/// Stand-in used when no summarization capability is bound.
pub struct PlaceholderModel;

impl fmt::Debug for PlaceholderModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceholderModel").finish()
    }
}

impl PlaceholderModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlaceholderModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InferenceModel for PlaceholderModel {
    fn name(&self) -> &str {
        "Placeholder"
    }

    async fn summarize(&self, _content: &str, _url: Option<&str>) -> Result<String, AiError> {
        Ok(SUMMARY_UNAVAILABLE.to_string())
    }

    fn is_available(&self) -> bool {
        false
    }
}
