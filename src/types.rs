//! Core type definitions for compile-time safety.
//!
//! This module provides newtype wrappers around string identifiers to prevent
//! accidental mixing of different ID types at compile time, plus the small
//! closed enums shared by the engine and its callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{display, storage::REFERENCE_SEPARATOR};
use crate::error::Error;

/// Text document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    /// Create a new `ContentId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a reference that may carry a slug prefix.
    ///
    /// `"songs/amazing-grace__42"` becomes `"42"`.
    pub fn from_reference(reference: &str) -> Self {
        Self(extract_id(reference).to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ContentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ContentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Scenario (playlist) identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub String);

impl ScenarioId {
    /// Create a new `ScenarioId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ScenarioId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ScenarioId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ScenarioId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Take the trailing `__`-delimited segment of a reference.
///
/// References without a separator are returned unchanged.
pub fn extract_id(reference: &str) -> &str {
    reference
        .rsplit_once(REFERENCE_SEPARATOR)
        .map_or(reference, |(_, id)| id)
}

/// Kind of a media display item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video clip.
    Video,
    /// Audio track.
    Audio,
}

impl MediaKind {
    /// Returns all media kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Image, Self::Video, Self::Audio]
    }

    /// Wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidMediaKind(s.to_string()))
    }
}

/// Navigation direction for slides and steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Forward.
    Next,
    /// Backward.
    Prev,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" => Ok(Self::Next),
            "prev" => Ok(Self::Prev),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

/// Typographic limits used to paginate text.
///
/// A limit of zero or less disables that dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConstraints {
    /// Maximum characters on one line.
    pub max_chars_per_line: i32,
    /// Maximum lines on one page.
    pub max_lines_per_page: i32,
}

impl DisplayConstraints {
    /// Create constraints from raw limits.
    #[must_use]
    pub const fn new(max_chars_per_line: i32, max_lines_per_page: i32) -> Self {
        Self { max_chars_per_line, max_lines_per_page }
    }

    /// Line width, or `None` when wrapping is disabled.
    pub fn line_width(&self) -> Option<usize> {
        usize::try_from(self.max_chars_per_line).ok().filter(|&w| w > 0)
    }

    /// Page height, or `None` when pagination is disabled.
    pub fn page_height(&self) -> Option<usize> {
        usize::try_from(self.max_lines_per_page).ok().filter(|&h| h > 0)
    }
}

impl Default for DisplayConstraints {
    fn default() -> Self {
        Self::new(display::DEFAULT_MAX_CHARS_PER_LINE, display::DEFAULT_MAX_LINES_PER_PAGE)
    }
}
