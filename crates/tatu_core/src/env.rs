use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use crate::error::EnvironmentError;
use crate::models::InferenceModel;
use crate::storage::KvStore;

/// Name of the KV namespace holding cached article summaries.
pub const ARTICLES_KV_BINDING: &str = "summary_rss_articles";

pub const AI_BINDING: &str = "AI";

/// Named bindings a request's service graph is built from.
#[derive(Clone, Default)]
pub struct Environment {
    kv_namespaces: HashMap<String, Arc<dyn KvStore>>,
    ai: Option<Arc<dyn InferenceModel>>,
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.kv_namespaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("kv_namespaces", &names)
            .field("ai", &self.ai.as_ref().map(|m| m.name().to_string()))
            .finish()
    }
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kv(mut self, name: impl Into<String>, store: Arc<dyn KvStore>) -> Self {
        self.kv_namespaces.insert(name.into(), store);
        self
    }

    pub fn with_ai(mut self, model: Arc<dyn InferenceModel>) -> Self {
        self.ai = Some(model);
        self
    }

    pub fn get_kv(&self, name: &str) -> Result<Arc<dyn KvStore>, EnvironmentError> {
        self.kv_namespaces.get(name).cloned().ok_or_else(|| EnvironmentError {
            binding: name.to_string(),
            message: format!("KV namespace '{}' not found in bindings", name),
        })
    }

    pub fn get_ai(&self) -> Result<Arc<dyn InferenceModel>, EnvironmentError> {
        self.ai.clone().ok_or_else(|| EnvironmentError {
            binding: AI_BINDING.to_string(),
            message: "AI binding not found in environment".to_string(),
        })
    }
}
