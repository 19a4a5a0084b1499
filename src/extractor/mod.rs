//! Readable-content extraction and summarization.
//!
//! `extract` is the whole ContentExtractor contract: main-content isolation,
//! tag stripping, a usability length gate, and summary truncation. Every
//! internal failure is reported as `Unusable`; nothing panics or escapes for
//! the pipeline to crash on.

pub mod reader;

use thiserror::Error;
use url::Url;

use crate::config::PipelineConfig;

/// Marker appended to a summary that was cut at the cap.
pub const TRUNCATION_MARKER: &str = "...";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Unusable {
    #[error("no readable content")]
    NoContent,
    #[error("text too short ({len} chars, minimum {min})")]
    TooShort { len: usize, min: usize },
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub title: Option<String>,
    pub text: String,
    pub summary: String,
}

pub fn extract(html: &str, url: &Url, cfg: &PipelineConfig) -> Result<Extraction, Unusable> {
    let read = reader::read(html, url).ok_or(Unusable::NoContent)?;

    let text = normalize_whitespace(&read.text);
    let len = text.chars().count();
    if len == 0 {
        return Err(Unusable::NoContent);
    }
    if len < cfg.min_text_len {
        return Err(Unusable::TooShort {
            len,
            min: cfg.min_text_len,
        });
    }

    let summary = summarize(&text, cfg.summary_cap);
    Ok(Extraction {
        title: read.title,
        text,
        summary,
    })
}

/// First `cap` characters plus the truncation marker; text within the cap is
/// returned unchanged.
pub fn summarize(text: &str, cap: usize) -> String {
    if text.chars().count() > cap {
        let mut summary: String = text.chars().take(cap).collect();
        summary.push_str(TRUNCATION_MARKER);
        summary
    } else {
        text.to_string()
    }
}

/// Collapse runs of spaces/tabs and squeeze blank-line stacks down to one
/// paragraph break.
pub fn normalize_whitespace(text: &str) -> String {
    let space_regex = regex::Regex::new(r"[ \t]+").unwrap();
    let newline_regex = regex::Regex::new(r"\n\s*\n+").unwrap();

    let spaced = space_regex.replace_all(text.trim(), " ");
    newline_regex.replace_all(&spaced, "\n\n").to_string()
}
