//! `Stageflow` - presentation state engine for live-event projection.
//!
//! This crate decides what is on the projector at any moment (ad-hoc text or
//! media, or a position within a playlist of steps) and reflows text into
//! screen-sized pages.

// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod input;
pub mod paginator;
pub mod scenario;
pub mod screen;
pub mod services;
pub mod types;
pub mod ui;

pub use error::{Error, Result};
pub use screen::{DisplayItem, PresentationEngine, ScreenState, ScreenStore};
