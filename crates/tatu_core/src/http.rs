use async_trait::async_trait;
use std::time::Duration;
use crate::error::HttpError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-request options for [`HttpClient::get`].
///
/// The cache fields are advisory hints for any edge cache in front of the
/// origin; nothing depends on them being honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOptions {
    pub cache_ttl: Option<Duration>,
    pub cache_everything: bool,
    pub timeout: Duration,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            cache_ttl: None,
            cache_everything: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GetOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    pub fn cache_everything(mut self) -> Self {
        self.cache_everything = true;
        self
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` with a single attempt and return the decoded body.
    async fn get(&self, url: &str, options: &GetOptions) -> std::result::Result<String, HttpError>;
}
