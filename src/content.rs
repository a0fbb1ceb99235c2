//! Text documents and slide splitting.
//!
//! A text document (song lyrics, scripture passage, announcement) is stored as
//! raw text; slides are the blank-line-delimited blocks of that text.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::ContentId;

/// Regex matching one or more blank (whitespace-only) lines between slides.
#[allow(clippy::expect_used)]
static RE_SLIDE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[ \t]*\n\s*").expect("valid regex: RE_SLIDE_BREAK")
});

/// A resolved text document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Document identifier.
    pub id: ContentId,
    /// Display title.
    pub title: String,
    /// Ordered slides.
    pub slides: Vec<String>,
}

impl ContentItem {
    /// Create a document from already-split slides.
    pub fn new(id: impl Into<ContentId>, title: impl Into<String>, slides: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slides,
        }
    }

    /// Create a document from raw text, splitting it into slides.
    pub fn from_raw(id: impl Into<ContentId>, title: impl Into<String>, raw: &str) -> Self {
        Self::new(id, title, split_slides(raw))
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide at `index`, if present.
    pub fn slide(&self, index: usize) -> Option<&str> {
        self.slides.get(index).map(String::as_str)
    }
}

/// Split raw document text into trimmed, non-empty slides on blank lines.
pub fn split_slides(raw: &str) -> Vec<String> {
    let normalized = raw.replace("\r\n", "\n");
    RE_SLIDE_BREAK
        .split(&normalized)
        .map(str::trim)
        .filter(|slide| !slide.is_empty())
        .map(String::from)
        .collect()
}
