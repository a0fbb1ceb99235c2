//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Display constraint defaults.
pub mod display {
    /// Default maximum characters per projected line.
    pub const DEFAULT_MAX_CHARS_PER_LINE: i32 = 40;

    /// Default maximum lines per projected page.
    pub const DEFAULT_MAX_LINES_PER_PAGE: i32 = 4;
}

/// Data directory layout.
pub mod storage {
    /// Subdirectory holding text documents.
    pub const TEXTS_DIR: &str = "texts";

    /// Subdirectory holding scenario documents.
    pub const SCENARIOS_DIR: &str = "scenarios";

    /// Log file written by the console binary.
    pub const LOG_FILE: &str = "stageflow.log";

    /// Extension of repository documents.
    pub const DOCUMENT_EXTENSION: &str = "json";

    /// Separator between a human-readable slug and the id in a reference.
    pub const REFERENCE_SEPARATOR: &str = "__";
}

/// Change notification constants.
pub mod notify {
    /// Capacity of the screen-changed broadcast channel.
    pub const CHANNEL_CAPACITY: usize = 16;
}

/// Operator console constants.
pub mod console {
    /// Keyboard poll interval in milliseconds.
    pub const POLL_INTERVAL_MS: u64 = 50;
}
