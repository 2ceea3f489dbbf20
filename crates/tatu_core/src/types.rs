use serde::{Deserialize, Serialize};

/// One item of a source feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub comments: String,
}

/// Sanitized article HTML plus its summary, as stored in the cache.
///
/// `article == None` means nothing could be extracted from the page. The
/// all-absent value is cached too, so a known-bad URL is not fetched again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub article: Option<String>,
    pub summary: Option<String>,
}

impl ArticleSummary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_content(&self) -> bool {
        self.article.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ArticleProcessingResult {
    Success { data: ArticleSummary },
    Failure { error: String },
}

impl ArticleProcessingResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ArticleProcessingResult::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleWithEntry {
    pub entry: FeedEntry,
    pub result: ArticleProcessingResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult {
    pub results: Vec<ArticleWithEntry>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl PageResult {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_layout() {
        let empty = serde_json::to_string(&ArticleSummary::empty()).unwrap();
        assert_eq!(empty, r#"{"article":null,"summary":null}"#);

        let stored: ArticleSummary = serde_json::from_str(r#"{"article":"<p>x</p>"}"#).unwrap();
        assert_eq!(stored.article.as_deref(), Some("<p>x</p>"));
        assert_eq!(stored.summary, None);
    }

    #[test]
    fn test_page_navigation() {
        let page = PageResult {
            results: vec![],
            total_items: 25,
            total_pages: 3,
            current_page: 2,
        };
        assert!(page.has_previous());
        assert!(page.has_next());

        let last = PageResult { current_page: 3, ..page };
        assert!(!last.has_next());
    }
}
