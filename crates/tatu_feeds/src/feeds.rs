use feed_rs::model::Entry;
use feed_rs::parser::ParseFeedError;
use scraper::{Html, Selector};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tatu_core::{FeedEntry, FeedError, GetOptions, HttpClient};
use tracing::{error, info, instrument};

/// The feeds the site renders. URLs are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedSource {
    HackerNews,
    TheVerge,
}

impl FeedSource {
    pub fn all() -> [FeedSource; 2] {
        [FeedSource::HackerNews, FeedSource::TheVerge]
    }

    pub fn url(&self) -> &'static str {
        match self {
            FeedSource::HackerNews => "https://news.ycombinator.com/rss",
            FeedSource::TheVerge => "https://www.theverge.com/rss/index.xml",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FeedSource::HackerNews => "Hacker News",
            FeedSource::TheVerge => "The Verge",
        }
    }

    pub fn heading(&self) -> String {
        format!("{} Summary", self.name())
    }

    /// Route the feed is served from.
    pub fn path(&self) -> &'static str {
        match self {
            FeedSource::HackerNews => "/",
            FeedSource::TheVerge => "/the-verge",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            FeedSource::HackerNews => "hacker-news",
            FeedSource::TheVerge => "the-verge",
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FeedSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hacker-news" | "hackernews" | "hn" => Ok(FeedSource::HackerNews),
            "the-verge" | "theverge" | "verge" => Ok(FeedSource::TheVerge),
            other => Err(format!("Unknown feed: {} (expected hacker-news or the-verge)", other)),
        }
    }
}

pub struct FeedFetcher {
    http: Arc<dyn HttpClient>,
}

impl FeedFetcher {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self { http }
    }

    /// Retrieve and parse a feed. A feed with no usable entries is an error.
    #[instrument(skip(self), fields(feed = source.name()))]
    pub async fn fetch(&self, source: FeedSource) -> Result<Vec<FeedEntry>, FeedError> {
        let result = self.fetch_entries(source).await;
        match &result {
            Ok(entries) => info!("📰 Fetched {} {} entries", entries.len(), source.name()),
            Err(e) => error!("Failed to fetch {} feed: {}", source.name(), e),
        }
        result
    }

    async fn fetch_entries(&self, source: FeedSource) -> Result<Vec<FeedEntry>, FeedError> {
        let body = self
            .http
            .get(source.url(), &GetOptions::default())
            .await
            .map_err(|e| FeedError {
                message: format!("Failed to extract {} RSS feed: {}", source.name(), e),
                cause: Some(e),
            })?;

        let entries = parse_feed(body.as_bytes())
            .map_err(|e| FeedError::new(format!("Failed to extract {} RSS feed: {}", source.name(), e)))?;

        if entries.is_empty() {
            return Err(FeedError::new(format!("No entries found in {} RSS feed", source.name())));
        }

        Ok(entries)
    }
}

/// Parse RSS or Atom into entries, preserving feed order and skipping
/// entries without a link.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<FeedEntry>, ParseFeedError> {
    let feed = feed_rs::parser::parse(bytes)?;
    Ok(feed.entries.iter().filter_map(to_feed_entry).collect())
}

fn to_feed_entry(entry: &Entry) -> Option<FeedEntry> {
    let link = entry
        .links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| entry.links.iter().find(|l| l.rel.as_deref() != Some("replies")))?
        .href
        .trim()
        .to_string();
    if link.is_empty() {
        return None;
    }

    let title = entry
        .title
        .as_ref()
        .map(|t| t.content.trim().to_string())
        .unwrap_or_default();

    let comments = entry
        .links
        .iter()
        .find(|l| l.rel.as_deref() == Some("replies"))
        .map(|l| l.href.clone())
        .or_else(|| entry.summary.as_ref().and_then(|s| comments_anchor(&s.content)))
        .or_else(|| {
            entry
                .content
                .as_ref()
                .and_then(|c| c.body.as_deref())
                .and_then(comments_anchor)
        })
        .unwrap_or_else(|| link.clone());

    Some(FeedEntry { title, link, comments })
}

// Hacker News puts `<a href="...item?id=N">Comments</a>` in each description.
fn comments_anchor(html: &str) -> Option<String> {
    let fragment = Html::parse_fragment(html);
    let anchors = Selector::parse("a[href]").ok()?;
    fragment
        .select(&anchors)
        .find(|a| a.text().collect::<String>().trim().eq_ignore_ascii_case("comments"))
        .and_then(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string())
}
