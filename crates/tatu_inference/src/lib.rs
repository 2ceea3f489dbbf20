pub mod models;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
}

pub mod prelude {
    pub use super::Config;
    pub use super::models::{create_model, DeepSeekModel, PlaceholderModel};
    pub use tatu_core::{InferenceModel, Result, Error, SUMMARY_UNAVAILABLE};
}

pub use models::{create_model, DeepSeekModel, PlaceholderModel};
