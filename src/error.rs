//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// A text or scenario reference resolved to nothing.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What was being looked up ("text", "scenario").
        kind: &'static str,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// Media kind string is not one of image/video/audio.
    #[error("Unknown media kind: {0:?} (expected image, video or audio)")]
    InvalidMediaKind(String),

    /// Navigation direction string is not next/prev.
    #[error("Unknown direction: {0:?} (expected next or prev)")]
    InvalidDirection(String),

    /// Scenario step with zero or several populated fields.
    #[error("Invalid scenario step: {0}")]
    InvalidStep(String),

    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// File parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create a not-found error for the given lookup kind.
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }

    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Whether this error means a referenced id resolved to nothing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn not_found_names_kind_and_id() {
        let err = Error::not_found("scenario", "sunday");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "scenario not found: sunday");
    }

    #[test]
    fn config_error_includes_hint() {
        let err = Error::config("Data directory missing", "Set STAGEFLOW_DATA_DIR");
        match &err {
            Error::Config { hint, .. } => assert!(hint.contains("STAGEFLOW_DATA_DIR")),
            _ => panic!("Expected Config error"),
        }
        assert!(!err.is_not_found());
    }
}
