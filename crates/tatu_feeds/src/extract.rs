//! Main-content extraction and sanitization for fetched article pages.
//!
//! `readability` scores the page and returns the HTML of the best content
//! candidate. That fragment is then run through `ammonia`, which drops
//! boilerplate containers along with scripts, event handlers and unsafe URL
//! schemes, resolves relative `href`/`src` against the article URL and marks
//! every link `target="_blank" rel="noopener nofollow"`.

use ammonia::{Builder, UrlRelative};
use readability::extractor;
use scraper::Html;
use std::io::Cursor;
use tatu_core::{ArticleError, ArticleStep};
use url::Url;

/// Elements removed together with everything inside them.
const BOILERPLATE_TAGS: &[&str] = &["nav", "aside", "header", "footer"];
const DISCARDED_TAGS: &[&str] = &["form", "button", "noscript", "iframe", "select", "title"];

/// Extract readable content from `html` and sanitize it.
///
/// `Ok(None)` means nothing readable was left after cleaning.
pub fn parse_article_content(html: &str, url: &str) -> Result<Option<String>, ArticleError> {
    let cleaner = ArticleCleaner::new(url)?;
    let fragment = extract_main_content(html, &cleaner.base)?;

    let cleaned = cleaner.clean(&fragment);
    if has_text(&cleaned) {
        Ok(Some(cleaned))
    } else {
        Ok(None)
    }
}

/// HTML of the element `readability` judges to hold the article body.
pub fn extract_main_content(html: &str, base: &Url) -> Result<String, ArticleError> {
    let mut reader = Cursor::new(html.as_bytes());
    let product = extractor::extract(&mut reader, base).map_err(|e| {
        ArticleError::new(
            base.as_str(),
            ArticleStep::Parse,
            format!("Readability extract error: {:?}", e),
        )
    })?;
    Ok(product.content)
}

fn has_text(fragment: &str) -> bool {
    Html::parse_fragment(fragment)
        .root_element()
        .text()
        .any(|text| !text.trim().is_empty())
}

/// Sanitizer bound to one article URL.
pub struct ArticleCleaner {
    base: Url,
}

impl ArticleCleaner {
    pub fn new(url: &str) -> Result<Self, ArticleError> {
        let base = Url::parse(url)
            .map_err(|e| ArticleError::new(url, ArticleStep::Parse, format!("Invalid article URL: {}", e)))?;
        Ok(Self { base })
    }

    pub fn clean(&self, fragment: &str) -> String {
        let mut builder = Builder::default();
        builder
            .rm_tags(BOILERPLATE_TAGS)
            .add_clean_content_tags(BOILERPLATE_TAGS)
            .add_clean_content_tags(DISCARDED_TAGS)
            .url_relative(UrlRelative::RewriteWithBase(self.base.clone()))
            .link_rel(Some("noopener nofollow"))
            .set_tag_attribute_value("a", "target", "_blank");
        builder.clean(fragment).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILLER: &str = "This paragraph carries enough words to look like the body of a real \
        article, so that extraction treats it as substantial reading material for the page.";

    fn page(body: &str) -> String {
        format!("<!DOCTYPE html><html><head><title>T</title></head><body>{}</body></html>", body)
    }

    fn extract(html: &str) -> Option<String> {
        parse_article_content(html, "https://example.com/blog/post").unwrap()
    }

    #[test]
    fn test_paragraphs_directly_in_body() {
        let html = page(&format!(
            "<h1>A plain essay</h1><p>{0}</p><p>{0}</p><p>{0}</p><p>Closing thoughts. {0}</p>",
            FILLER
        ));
        let content = extract(&html).unwrap();
        assert!(content.contains("This paragraph carries"));
        assert!(content.contains("Closing thoughts."));
    }

    #[test]
    fn test_short_article_is_kept() {
        let html = page("<article><p>A brief note about the release, with one sentence of detail.</p></article>");
        let content = extract(&html).unwrap();
        assert!(content.contains("A brief note about the release"));
    }

    #[test]
    fn test_drops_boilerplate_inside_article() {
        let html = page(&format!(
            r#"<article>
                <nav><a href="/">Home</a> Subscribe now</nav>
                <aside>Related stories you may like</aside>
                <form><button>Share on Twitter</button></form>
                <p>{0}</p><p>{0}</p>
                <footer>Copyright Example Media</footer>
            </article>"#,
            FILLER
        ));
        let content = extract(&html).unwrap();
        assert!(content.contains("This paragraph carries"));
        for boilerplate in ["Subscribe now", "Related stories", "Share on Twitter", "Copyright"] {
            assert!(!content.contains(boilerplate), "kept {:?} in {}", boilerplate, content);
        }
    }

    #[test]
    fn test_picks_densest_article_over_teaser() {
        let html = page(&format!(
            r#"<article class="teaser"><h2>Sponsored teaser headline</h2><p>Click here.</p></article>
               <article><p>First. {0}</p><p>Second. {0}</p><p>Third. {0}</p><p>Fourth. {0}</p><p>Fifth. {0}</p></article>"#,
            FILLER
        ));
        let content = extract(&html).unwrap();
        assert!(content.contains("Fifth."));
        assert!(!content.contains("Sponsored teaser headline"));
    }

    #[test]
    fn test_no_readable_content() {
        let html = page("<nav><a href=\"/\">Home</a></nav><footer>Nothing to read</footer>");
        assert_eq!(extract(&html), None);
    }

    #[test]
    fn test_sanitizes_and_absolutizes() {
        let html = page(&format!(
            r#"<article>
                <p>{0}</p>
                <script>alert('x')</script>
                <p onclick="steal()">{0} Read <a href="/next" target="_self">more</a> or <a href="javascript:alert(1)">this</a>.
                <img src="images/cover.png" onerror="steal()"></p>
            </article>"#,
            FILLER
        ));
        let content = extract(&html).unwrap();

        assert!(!content.contains("<script"));
        assert!(!content.contains("alert('x')"));
        assert!(!content.contains("onclick"));
        assert!(!content.contains("onerror"));
        assert!(!content.contains("javascript:"));
        assert!(content.contains(r#"href="https://example.com/next""#));
        assert!(content.contains(r#"src="https://example.com/blog/images/cover.png""#));
        assert!(content.contains(r#"target="_blank""#));
        assert!(content.contains(r#"rel="noopener nofollow""#));
        assert!(!content.contains("_self"));
    }

    #[test]
    fn test_invalid_url_is_parse_error() {
        let err = parse_article_content("<p>hi</p>", "not a url").unwrap_err();
        assert_eq!(err.step, ArticleStep::Parse);
        assert!(err.message.starts_with("Invalid article URL"));
    }

    #[test]
    fn test_cleaner_strips_boilerplate_containers() {
        let cleaner = ArticleCleaner::new("https://example.com/").unwrap();
        let cleaned = cleaner.clean("<header>Masthead</header><p>Body</p><footer>Legal</footer>");
        assert_eq!(cleaned, "<p>Body</p>");
    }
}
