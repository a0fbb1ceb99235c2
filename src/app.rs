//! Operator console application state.
//!
//! Runs console commands against the presentation engine and keeps the copy
//! of the screen state the UI draws from.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::input::ConsoleCommand;
use crate::screen::{PresentationEngine, ScreenState};
use crate::services::{ScreenChanged, SettingsProvider, SharedSettings};
use crate::types::{Direction, DisplayConstraints, ScenarioId};

/// The operator console.
pub struct App {
    engine: PresentationEngine,
    settings: Arc<SharedSettings>,
    updates: broadcast::Receiver<ScreenChanged>,
    state: ScreenState,
    status_message: Option<String>,
    error_message: Option<String>,
    changes_seen: u64,
    should_quit: bool,
}

impl App {
    /// Create a console over `engine`, listening on `updates` for changes.
    pub fn new(
        engine: PresentationEngine,
        settings: Arc<SharedSettings>,
        updates: broadcast::Receiver<ScreenChanged>,
    ) -> Self {
        let state = engine.get_state();
        Self {
            engine,
            settings,
            updates,
            state,
            status_message: None,
            error_message: None,
            changes_seen: 0,
            should_quit: false,
        }
    }

    /// Screen state as last seen by the console.
    pub const fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Current display constraints.
    pub fn constraints(&self) -> DisplayConstraints {
        self.settings.current()
    }

    /// Last informational message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Last error message.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Number of change notifications received.
    pub const fn changes_seen(&self) -> u64 {
        self.changes_seen
    }

    /// Whether the console should exit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drain pending change notifications and refresh the state copy.
    pub fn handle_updates(&mut self) {
        let mut changed = false;
        loop {
            match self.updates.try_recv() {
                Ok(ScreenChanged) => {
                    self.changes_seen += 1;
                    changed = true;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    self.changes_seen += skipped;
                    changed = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        if changed {
            self.state = self.engine.get_state();
        }
    }

    /// Open a scenario at its first step.
    pub async fn open_scenario(&mut self, id: &ScenarioId) {
        match self.engine.set_scenario(id, None).await {
            Ok(state) => {
                self.state = state;
                self.status_message = Some(format!("Opened scenario {id}"));
                self.error_message = None;
            }
            Err(e) => {
                tracing::warn!("Failed to open scenario {id}: {e}");
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Run one console command.
    pub async fn handle_command(&mut self, command: ConsoleCommand) {
        self.error_message = None;
        self.status_message = None;

        self.state = match command {
            ConsoleCommand::NextSlide => self.engine.navigate_slide(Direction::Next).await,
            ConsoleCommand::PrevSlide => self.engine.navigate_slide(Direction::Prev).await,
            ConsoleCommand::NextStep => self.engine.navigate_step(Direction::Next).await,
            ConsoleCommand::PrevStep => self.engine.navigate_step(Direction::Prev).await,
            ConsoleCommand::ToggleVisibility => self.engine.toggle_visibility(),
            ConsoleCommand::Show => self.engine.set_visibility(true),
            ConsoleCommand::Hide => self.engine.set_visibility(false),
            ConsoleCommand::Clear => self.engine.clear(),
            ConsoleCommand::WidenLines => self.adjust(|c| c.max_chars_per_line += 1),
            ConsoleCommand::NarrowLines => {
                self.adjust(|c| c.max_chars_per_line = (c.max_chars_per_line - 1).max(0))
            }
            ConsoleCommand::MoreLines => self.adjust(|c| c.max_lines_per_page += 1),
            ConsoleCommand::FewerLines => {
                self.adjust(|c| c.max_lines_per_page = (c.max_lines_per_page - 1).max(0))
            }
            ConsoleCommand::Quit => {
                self.should_quit = true;
                self.engine.get_state()
            }
        };
    }

    /// Change constraints; they apply from the next pagination on.
    fn adjust<F>(&mut self, f: F) -> ScreenState
    where
        F: FnOnce(&mut DisplayConstraints),
    {
        let updated = self.settings.update(f);
        self.status_message = Some(format!(
            "{} chars/line, {} lines/page (applies from the next page)",
            updated.max_chars_per_line, updated.max_lines_per_page
        ));
        self.engine.get_state()
    }
}
