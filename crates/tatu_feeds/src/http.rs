use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use std::time::Duration;
use tatu_core::{Error, GetOptions, HttpClient, HttpError, Result};
use tracing::debug;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// Upper bound for reading a response body once headers have arrived.
pub const BODY_READ_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("tatu-news/", env!("CARGO_PKG_VERSION"), " (RSS summarizer)");

/// [`HttpClient`] backed by a shared `reqwest::Client`.
///
/// Timeouts are enforced per call from [`GetOptions::timeout`] rather than on
/// the client, so one instance serves both feed and article fetches.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                Error::Http(HttpError {
                    status: None,
                    url: None,
                    message: format!("failed to create HTTP client: {}", e),
                })
            })?;

        Ok(Self { client })
    }
}

/// Render the advisory cache hints as a `Cache-Control` request value.
pub fn cache_control(options: &GetOptions) -> Option<String> {
    let mut directives = Vec::new();
    if let Some(ttl) = options.cache_ttl {
        directives.push(format!("max-age={}", ttl.as_secs()));
    }
    if options.cache_everything {
        directives.push("public".to_string());
    }

    if directives.is_empty() {
        None
    } else {
        Some(directives.join(", "))
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, options: &GetOptions) -> std::result::Result<String, HttpError> {
        debug!("GET {} (timeout {}ms)", url, options.timeout.as_millis());

        let mut request = self.client.get(url);
        if let Some(value) = cache_control(options) {
            request = request.header(CACHE_CONTROL, value);
        }

        let response = match tokio::time::timeout(options.timeout, request.send()).await {
            Err(_) => return Err(HttpError::timeout(url, options.timeout)),
            Ok(Err(e)) => return Err(HttpError::network(url, e)),
            Ok(Ok(response)) => response,
        };

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(HttpError::status(
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status"),
            ));
        }

        match tokio::time::timeout(BODY_READ_TIMEOUT, response.text()).await {
            Err(_) => Err(HttpError::timeout(url, BODY_READ_TIMEOUT)),
            Ok(Err(e)) => Err(HttpError::network(url, e)),
            Ok(Ok(body)) => Ok(body),
        }
    }
}
