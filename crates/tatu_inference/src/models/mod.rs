use std::sync::Arc;
use tatu_core::{Error, InferenceModel, Result};
use crate::Config;

pub mod deepseek;
pub mod placeholder;

pub use deepseek::DeepSeekModel;
pub use placeholder::PlaceholderModel;

pub const DEFAULT_MODEL: &str = "placeholder";

/// Pick a summarizer by `config.model_name`, defaulting to the placeholder.
pub fn create_model(config: Option<Config>) -> Result<Arc<dyn InferenceModel>> {
    let config = config.unwrap_or_default();
    let name = config.model_name.as_deref().unwrap_or(DEFAULT_MODEL).to_lowercase();

    match name.as_str() {
        "placeholder" | "dummy" => Ok(Arc::new(PlaceholderModel::new())),
        "deepseek" => Ok(Arc::new(DeepSeekModel::new(config.api_key)?)),
        other => Err(Error::Inference(format!("Unknown model: {}", other))),
    }
}
