use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single HTTP GET.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpError {
    pub status: Option<u16>,
    pub url: Option<String>,
    pub message: String,
}

impl HttpError {
    pub fn network(url: &str, cause: impl fmt::Display) -> Self {
        Self {
            status: None,
            url: Some(url.to_string()),
            message: format!("Failed to fetch '{}': {}", url, cause),
        }
    }

    pub fn status(url: &str, status: u16, reason: &str) -> Self {
        Self {
            status: Some(status),
            url: Some(url.to_string()),
            message: format!("HTTP {}: {}", status, reason),
        }
    }

    /// Used for both the request timeout and the body-read timeout.
    pub fn timeout(url: &str, timeout: Duration) -> Self {
        Self {
            status: None,
            url: Some(url.to_string()),
            message: format!("Request timed out after {}ms", timeout.as_millis()),
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.message.starts_with("Request timed out")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvOperation {
    Get,
    Put,
    Delete,
}

impl fmt::Display for KvOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvOperation::Get => write!(f, "get"),
            KvOperation::Put => write!(f, "put"),
            KvOperation::Delete => write!(f, "delete"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct KvError {
    pub operation: KvOperation,
    pub key: String,
    pub message: String,
}

impl KvError {
    pub fn new(operation: KvOperation, key: &str, cause: impl fmt::Display) -> Self {
        Self {
            operation,
            key: key.to_string(),
            message: format!("Failed to {} key '{}': {}", operation, key, cause),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct AiError {
    pub operation: String,
    pub message: String,
}

/// A named binding could not be resolved from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EnvironmentError {
    pub binding: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FeedError {
    pub message: String,
    #[source]
    pub cause: Option<HttpError>,
}

impl FeedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }
}

/// The pipeline step an [`ArticleError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStep {
    Fetch,
    Parse,
    Clean,
    Summarize,
    Cache,
}

impl fmt::Display for ArticleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            ArticleStep::Fetch => "fetch",
            ArticleStep::Parse => "parse",
            ArticleStep::Clean => "clean",
            ArticleStep::Summarize => "summarize",
            ArticleStep::Cache => "cache",
        };
        f.write_str(step)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error(transparent)]
    Kv(#[from] KvError),
    #[error(transparent)]
    Ai(#[from] AiError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ArticleError {
    pub url: String,
    pub step: ArticleStep,
    pub message: String,
    #[source]
    pub cause: Option<ServiceError>,
}

impl ArticleError {
    pub fn new(url: &str, step: ArticleStep, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            step,
            message: message.into(),
            cause: None,
        }
    }

    pub fn fetch(url: &str, cause: HttpError) -> Self {
        Self {
            url: url.to_string(),
            step: ArticleStep::Fetch,
            message: format!("Failed to fetch article: {}", cause),
            cause: Some(cause.into()),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Kv(#[from] KvError),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Article(#[from] ArticleError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Inference error: {0}")]
    Inference(String),
}

pub type Result<T> = std::result::Result<T, Error>;
