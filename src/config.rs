//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{display, storage};
use crate::error::{Error, Result};
use crate::types::DisplayConstraints;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Root of the text and scenario documents
    pub data_dir: PathBuf,
    /// Initial maximum characters per line (≤ 0 disables wrapping)
    pub max_chars_per_line: i32,
    /// Initial maximum lines per page (≤ 0 disables pagination)
    pub max_lines_per_page: i32,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: default_data_dir(),
            max_chars_per_line: display::DEFAULT_MAX_CHARS_PER_LINE,
            max_lines_per_page: display::DEFAULT_MAX_LINES_PER_PAGE,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Fails when `STAGEFLOW_DATA_DIR` names something that is not a directory.
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("STAGEFLOW_DATA_DIR") {
            config = config.with_data_dir(check_data_dir(&path)?);
        }

        if let Some(chars) = parse_limit("STAGEFLOW_MAX_CHARS_PER_LINE") {
            config.max_chars_per_line = chars;
        }

        if let Some(lines) = parse_limit("STAGEFLOW_MAX_LINES_PER_PAGE") {
            config.max_lines_per_page = lines;
        }

        Ok(config)
    }

    /// Same configuration rooted at another data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Directory of text documents.
    pub fn texts_dir(&self) -> PathBuf {
        self.data_dir.join(storage::TEXTS_DIR)
    }

    /// Directory of scenario documents.
    pub fn scenarios_dir(&self) -> PathBuf {
        self.data_dir.join(storage::SCENARIOS_DIR)
    }

    /// Log file of the console binary.
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(storage::LOG_FILE)
    }

    /// Display constraints to start with.
    pub const fn display_constraints(&self) -> DisplayConstraints {
        DisplayConstraints::new(self.max_chars_per_line, self.max_lines_per_page)
    }
}

/// Expand `~` and reject paths that exist but are not directories.
///
/// A missing directory is fine; the console creates it on start.
fn check_data_dir(raw: &str) -> Result<PathBuf> {
    let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
    if path.exists() && !path.is_dir() {
        return Err(Error::config(
            format!("Data directory {} is not a directory", path.display()),
            "Set STAGEFLOW_DATA_DIR to a directory holding texts/ and scenarios/",
        ));
    }
    Ok(path)
}

/// Read an integer limit from the environment, ignoring malformed values.
fn parse_limit(var: &str) -> Option<i32> {
    let raw = env::var(var).ok()?;
    match raw.trim().parse::<i32>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring {var}={raw:?}: {e}");
            None
        }
    }
}

/// `<platform data dir>/stageflow`, or `./stageflow-data` when there is none.
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from("stageflow-data"),
        |dir| dir.join(env!("CARGO_PKG_NAME")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_display_defaults() {
        let config = Config::default();
        assert_eq!(config.display_constraints(), DisplayConstraints::default());
        assert_eq!(config.app_name(), "stageflow");
        assert!(config.texts_dir().ends_with("texts"));
        assert!(config.scenarios_dir().ends_with("scenarios"));
        assert!(config.log_file().ends_with("stageflow.log"));

        let moved = config.with_data_dir("/srv/stage");
        assert_eq!(moved.texts_dir(), PathBuf::from("/srv/stage/texts"));
    }

    #[test]
    fn data_dir_must_not_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("stageflow.json");
        std::fs::write(&file, "{}").unwrap();

        let err = check_data_dir(file.to_str().unwrap()).unwrap_err();
        match &err {
            Error::Config { message, hint } => {
                assert!(message.contains("not a directory"));
                assert!(hint.contains("STAGEFLOW_DATA_DIR"));
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn data_dir_may_be_missing_or_existing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(check_data_dir(dir.path().to_str().unwrap()).unwrap(), dir.path());

        let missing = dir.path().join("not-yet");
        assert_eq!(check_data_dir(missing.to_str().unwrap()).unwrap(), missing);
    }
}
