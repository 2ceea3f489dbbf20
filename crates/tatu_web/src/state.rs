use std::fmt;
use std::sync::Arc;
use tatu_core::{Environment, HttpClient};
use tatu_feeds::PageSettings;

/// Process-wide bindings; services are rebuilt from them per request.
#[derive(Clone)]
pub struct AppState {
    pub environment: Environment,
    pub http: Arc<dyn HttpClient>,
    pub settings: PageSettings,
}

impl AppState {
    pub fn new(environment: Environment, http: Arc<dyn HttpClient>, settings: PageSettings) -> Self {
        Self {
            environment,
            http,
            settings,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.environment)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
