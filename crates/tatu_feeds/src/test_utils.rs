use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tatu_core::{GetOptions, HttpClient, HttpError, KvStore};
use tatu_inference::PlaceholderModel;
use tatu_storage::InMemoryStorage;

use crate::runtime::Services;

#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(String),
    Status(u16),
    Timeout,
}

/// Canned responses keyed by URL. Unknown URLs answer 404.
#[derive(Debug, Default)]
pub struct MockHttpClient {
    responses: HashMap<String, MockResponse>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn respond(mut self, url: &str, body: impl Into<String>) -> Self {
        self.responses.insert(url.to_string(), MockResponse::Body(body.into()));
        self
    }

    pub fn fail_with_status(mut self, url: &str, status: u16) -> Self {
        self.responses.insert(url.to_string(), MockResponse::Status(status));
        self
    }

    pub fn time_out(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), MockResponse::Timeout);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| u.as_str() == url).count()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, options: &GetOptions) -> Result<String, HttpError> {
        self.calls.lock().unwrap().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(HttpError::status(url, *status, "Mock Status")),
            Some(MockResponse::Timeout) => Err(HttpError::timeout(url, options.timeout)),
            None => Err(HttpError::status(url, 404, "Not Found")),
        }
    }
}

pub fn article_url(i: usize) -> String {
    format!("https://example.com/articles/{}", i)
}

/// RSS 2.0 document with `count` items in the Hacker News shape.
pub fn rss_feed(count: usize) -> String {
    let items: String = (0..count)
        .map(|i| {
            format!(
                r#"<item><title>Story {i}</title><link>{link}</link><description><![CDATA[<a href="https://news.ycombinator.com/item?id={i}">Comments</a>]]></description></item>"#,
                i = i,
                link = article_url(i)
            )
        })
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0"><channel><title>Test</title><link>https://example.com/</link><description>Test feed</description>{}</channel></rss>"#,
        items
    )
}

pub fn article_html(title: &str) -> String {
    let paragraph = "Readable body text that is long enough to be picked up by the extractor \
        as the main content of the page, with enough commas, words and sentences to score well.";
    format!(
        r#"<html><head><script>track()</script></head><body>
            <nav>menu</nav>
            <article><h1>{title}</h1><p><strong>{title}</strong> {p}</p><p>{p} <a href="/related">related</a></p><script>evil()</script></article>
        </body></html>"#,
        title = title,
        p = paragraph
    )
}

pub fn services(http: Arc<dyn HttpClient>) -> (Services, Arc<InMemoryStorage>) {
    let store = Arc::new(InMemoryStorage::new());
    let services = Services::new(http, store.clone() as Arc<dyn KvStore>, Arc::new(PlaceholderModel::new()));
    (services, store)
}
