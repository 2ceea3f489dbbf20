use ammonia::clean_text;
use std::fmt::Write;
use tatu_core::{ArticleProcessingResult, ArticleWithEntry, PageResult, SUMMARY_UNAVAILABLE};
use tatu_feeds::FeedSource;

const STYLESHEET: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.purple.min.css";

pub fn layout(content: &str) -> String {
    let mut nav = String::new();
    for source in FeedSource::all() {
        let _ = write!(
            nav,
            r#"<li><a href="{}" class="contrast">{}</a></li>"#,
            source.path(),
            source.name()
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<link rel="stylesheet" href="{STYLESHEET}">
<title>Tatu News</title>
</head>
<body class="container">
<nav><ul><li><strong>Tatu News</strong></li></ul><ul>{nav}</ul></nav>
{content}
</body>
</html>"#
    )
}

pub fn feed_page(source: FeedSource, page: &PageResult) -> String {
    let mut body = String::new();
    let _ = write!(
        body,
        "<h1>{}</h1><p>Page {} of {} ({} total articles)</p>",
        source.heading(),
        page.current_page,
        page.total_pages,
        page.total_items
    );

    body.push_str(r#"<nav style="margin-bottom: 1rem;">"#);
    if page.has_previous() {
        let _ = write!(
            body,
            r#"<a href="{}?page={}" class="contrast" style="margin-right: 1rem;">← Previous</a>"#,
            source.path(),
            page.current_page - 1
        );
    }
    if page.has_next() {
        let _ = write!(
            body,
            r#"<a href="{}?page={}" class="contrast">Next →</a>"#,
            source.path(),
            page.current_page + 1
        );
    }
    body.push_str("</nav>");

    for (index, item) in page.results.iter().enumerate() {
        entry_block(&mut body, index, item);
    }

    layout(&body)
}

fn entry_block(out: &mut String, index: usize, item: &ArticleWithEntry) {
    let tone = if index % 2 == 0 { "primary" } else { "secondary" };
    let entry = &item.entry;

    let _ = write!(
        out,
        r#"<details><summary role="button" class="outline {tone}">{title}</summary><article><header><a href="{link}" target="_blank" rel="nofollow noopener">Article</a> | <a href="{comments}" target="_blank" rel="nofollow noopener">Comments</a></header>"#,
        tone = tone,
        title = clean_text(&entry.title),
        link = clean_text(&entry.link),
        comments = clean_text(&entry.comments),
    );

    match &item.result {
        ArticleProcessingResult::Success { data } => {
            let summary = data.summary.as_deref().unwrap_or(SUMMARY_UNAVAILABLE);
            let _ = write!(out, "<div><h2>Summary</h2><p>{}</p><hr><h2>Article</h2>", clean_text(summary));
            match &data.article {
                // already sanitized by the pipeline
                Some(article) => out.push_str(article),
                None => out.push_str("<p>No article content available.</p>"),
            }
            out.push_str("</div>");
        }
        ArticleProcessingResult::Failure { error } => {
            let _ = write!(
                out,
                "<div><h2>Unable to retrieve article</h2><p><small>Error: {}</small></p></div>",
                clean_text(error)
            );
        }
    }

    out.push_str("</article></details>");
}

pub fn error_page(message: &str) -> String {
    layout(&format!(
        r#"<h1>Error: {}</h1><a href="/" class="contrast">back to home</a>"#,
        clean_text(message)
    ))
}

pub fn not_found_page(path: &str) -> String {
    layout(&format!(
        r#"<h1>Not found - {}</h1><a href="/" class="contrast">back to home</a>"#,
        clean_text(path)
    ))
}
