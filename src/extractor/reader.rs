use readability::extractor;
use scraper::{Html, Selector};
use url::Url;

/// Raw readable content pulled out of a page, before any length or
/// eligibility checks.
#[derive(Debug)]
pub struct ReadResult {
    pub title: Option<String>,
    pub text: String,
}

/// Readability first; if it errors or comes back empty, fall back to
/// selector heuristics over the parsed document.
pub fn read(html: &str, url: &Url) -> Option<ReadResult> {
    if let Ok(article) = extractor::extract(&mut html.as_bytes(), url) {
        if !article.text.trim().is_empty() {
            return Some(ReadResult {
                title: non_empty(article.title),
                text: article.text,
            });
        }
    }

    fallback_read(html)
}

fn fallback_read(html: &str) -> Option<ReadResult> {
    let document = Html::parse_document(html);

    let text = main_content_text(&document)?;
    if text.trim().is_empty() {
        return None;
    }

    Some(ReadResult {
        title: page_title(&document),
        text,
    })
}

fn page_title(document: &Html) -> Option<String> {
    if let Ok(selector) = Selector::parse("meta[property='og:title']") {
        for element in document.select(&selector) {
            if let Some(content) = element.value().attr("content") {
                if let Some(title) = non_empty(content.to_string()) {
                    return Some(title);
                }
            }
        }
    }

    for tag in ["title", "h1"] {
        if let Ok(selector) = Selector::parse(tag) {
            for element in document.select(&selector) {
                let title = element.text().collect::<String>();
                if let Some(title) = non_empty(title) {
                    return Some(title);
                }
            }
        }
    }

    None
}

fn main_content_text(document: &Html) -> Option<String> {
    const CONTENT_SELECTORS: &[&str] = &[
        "article",
        "main",
        "[role='main']",
        ".article-body",
        ".entry-content",
        ".post",
        "#content",
    ];

    for selector_str in CONTENT_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let text = element.text().collect::<String>();
                if text.trim().chars().count() > 80 {
                    return Some(text);
                }
            }
        }
    }

    // Last resort: whole body text.
    let body_selector = Selector::parse("body").ok()?;
    let body = document.select(&body_selector).next()?;
    Some(body.text().collect::<String>())
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
