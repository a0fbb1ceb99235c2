//! Collaborators of the presentation engine.
//!
//! The engine only talks to these traits, so it can run against in-memory
//! stores in tests and against the data directory in the console binary.

pub mod content;
mod documents;
pub mod notifier;
pub mod scenario;
pub mod settings;

pub use content::{ContentRepository, FileContentRepository, MemoryContentRepository};
pub use notifier::{BroadcastNotifier, ChangeNotifier, NoopNotifier, ScreenChanged};
pub use scenario::{FileScenarioRepository, MemoryScenarioRepository, ScenarioRepository};
pub use settings::{SettingsProvider, SharedSettings};
