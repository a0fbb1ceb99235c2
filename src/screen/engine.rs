//! The presentation engine.
//!
//! Every mutation resolves what it needs first, then replaces the whole
//! [`ScreenState`] and fires the change notifier once. Lookup failures abort
//! before anything is committed. Operations that make no sense in the current
//! mode are silent no-ops that return the state unchanged and do not notify.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::services::{ChangeNotifier, ContentRepository, ScenarioRepository, SettingsProvider};
use crate::types::{ContentId, Direction, MediaKind, ScenarioId};

use super::navigation::{step_index, step_text};
use super::resolve::{build_text_item, clamp_index, resolve_step, PageSelect};
use super::{DisplayItem, ScenarioScreen, ScreenState, ScreenStore};

/// Owner of the live display state and its only legal mutations.
pub struct PresentationEngine {
    store: Arc<ScreenStore>,
    content: Arc<dyn ContentRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
    settings: Arc<dyn SettingsProvider>,
    notifier: Arc<dyn ChangeNotifier>,
}

impl PresentationEngine {
    /// Create an engine over an injected state holder and its collaborators.
    pub fn new(
        store: Arc<ScreenStore>,
        content: Arc<dyn ContentRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
        settings: Arc<dyn SettingsProvider>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Self {
        Self {
            store,
            content,
            scenarios,
            settings,
            notifier,
        }
    }

    /// The state holder this engine mutates.
    pub fn store(&self) -> Arc<ScreenStore> {
        Arc::clone(&self.store)
    }

    /// Copy of the current state.
    pub fn get_state(&self) -> ScreenState {
        self.store.snapshot()
    }

    /// Install `state` verbatim.
    pub fn set_state(&self, state: ScreenState) -> ScreenState {
        self.commit("set_state", state)
    }

    /// Show nothing.
    pub fn clear(&self) -> ScreenState {
        self.commit("clear", ScreenState::Empty)
    }

    /// Flip visibility of the current item. No-op in empty mode.
    pub fn toggle_visibility(&self) -> ScreenState {
        self.modify("toggle_visibility", |state| match state.visible() {
            Some(visible) => state.set_visible(!visible),
            None => false,
        })
    }

    /// Set visibility of the current item. No-op in empty mode.
    pub fn set_visibility(&self, visible: bool) -> ScreenState {
        self.modify("set_visibility", |state| state.set_visible(visible))
    }

    /// Show one slide of a text document, hidden, on its first page.
    ///
    /// `text_ref` may carry a slug prefix (`songs/amazing-grace__42`); only
    /// the trailing id is looked up. `slide_index` is clamped into range.
    pub async fn set_text(&self, text_ref: &str, slide_index: Option<usize>) -> Result<ScreenState> {
        let id = ContentId::from_reference(text_ref);
        let content = self
            .content
            .find_by_id(&id)
            .await?
            .ok_or_else(|| Error::not_found("text", text_ref))?;

        let requested = slide_index.unwrap_or(0);
        let item = build_text_item(
            id,
            Some(&content),
            requested,
            PageSelect::First,
            &self.settings.current(),
        );
        if item.slide_index != requested {
            tracing::debug!(
                "Clamped slide index {requested} to {} for {text_ref:?}",
                item.slide_index
            );
        }

        Ok(self.commit("set_text", ScreenState::single(DisplayItem::Text(item))))
    }

    /// Show a media item, hidden. The path is not checked.
    pub fn set_media(&self, kind: MediaKind, path: impl Into<String>) -> ScreenState {
        self.commit("set_media", ScreenState::single(DisplayItem::media(kind, path)))
    }

    /// Open a scenario at `step_index` (clamped), hidden.
    ///
    /// The screen keeps `scenario_id` as given, since later step navigation
    /// looks the scenario up again by it. A scenario without steps shows nothing.
    pub async fn set_scenario(
        &self,
        scenario_id: &ScenarioId,
        step_index: Option<usize>,
    ) -> Result<ScreenState> {
        let scenario = self
            .scenarios
            .find_by_id(scenario_id)
            .await?
            .ok_or_else(|| Error::not_found("scenario", scenario_id.as_str()))?;

        let total_steps = scenario.step_count();
        if total_steps == 0 {
            tracing::debug!("Scenario {scenario_id} has no steps, clearing screen");
            return Ok(self.commit("set_scenario", ScreenState::Empty));
        }

        let step_index = clamp_index(step_index.unwrap_or(0), total_steps);
        let current_item = match scenario.steps.get(step_index) {
            Some(step) => resolve_step(step, self.content.as_ref(), &self.settings.current()).await,
            None => DisplayItem::Blank,
        };

        let state = ScreenState::Scenario(ScenarioScreen {
            visible: false,
            scenario_id: scenario_id.clone(),
            scenario_title: scenario.title,
            step_index,
            total_steps,
            current_item,
        });
        Ok(self.commit("set_scenario", state))
    }

    /// Move one page through the text on screen, crossing slide boundaries.
    ///
    /// No-op when the current item is not text, its document is gone, or the
    /// first/last page has been reached.
    pub async fn navigate_slide(&self, direction: Direction) -> ScreenState {
        let mut state = self.store.snapshot();
        let Some(item) = state.current_text() else {
            tracing::debug!("navigate_slide ignored: no text on screen");
            return state;
        };

        let content = match self.content.find_by_id(&item.content_id).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::warn!("navigate_slide ignored: text {} no longer exists", item.content_id);
                return state;
            }
            Err(e) => {
                tracing::warn!("navigate_slide ignored: failed to load text {}: {e}", item.content_id);
                return state;
            }
        };

        let Some(next) = step_text(item, &content, direction, &self.settings.current()) else {
            tracing::debug!("navigate_slide {direction:?} ignored: at boundary");
            return state;
        };

        if let Some(current) = state.current_item_mut() {
            *current = DisplayItem::Text(next);
        }
        self.commit("navigate_slide", state)
    }

    /// Move one step through the open scenario, saturating at both ends.
    ///
    /// No-op outside scenario mode or when the scenario can no longer be loaded.
    pub async fn navigate_step(&self, direction: Direction) -> ScreenState {
        let mut screen = match self.store.snapshot() {
            ScreenState::Scenario(screen) => screen,
            other => {
                tracing::debug!("navigate_step ignored: no scenario open");
                return other;
            }
        };

        let scenario = match self.scenarios.find_by_id(&screen.scenario_id).await {
            Ok(Some(scenario)) if !scenario.steps.is_empty() => scenario,
            Ok(_) => {
                tracing::warn!("navigate_step ignored: scenario {} is gone or empty", screen.scenario_id);
                return ScreenState::Scenario(screen);
            }
            Err(e) => {
                tracing::warn!("navigate_step ignored: failed to load scenario {}: {e}", screen.scenario_id);
                return ScreenState::Scenario(screen);
            }
        };

        let total_steps = scenario.step_count();
        let index = step_index(screen.step_index, total_steps, direction);
        if let Some(step) = scenario.steps.get(index) {
            screen.current_item =
                resolve_step(step, self.content.as_ref(), &self.settings.current()).await;
        }
        screen.step_index = index;
        screen.total_steps = total_steps;
        screen.scenario_title = scenario.title;

        self.commit("navigate_step", ScreenState::Scenario(screen))
    }

    fn commit(&self, operation: &'static str, state: ScreenState) -> ScreenState {
        let committed = self.store.replace(state);
        tracing::info!("{operation}: screen is now {}", committed.mode_name());
        self.notifier.notify_screen_changed();
        committed
    }

    fn modify<F>(&self, operation: &'static str, f: F) -> ScreenState
    where
        F: FnOnce(&mut ScreenState) -> bool,
    {
        match self.store.modify(f) {
            Some(committed) => {
                tracing::info!("{operation}: visible = {:?}", committed.visible());
                self.notifier.notify_screen_changed();
                committed
            }
            None => {
                tracing::debug!("{operation} ignored: nothing on screen");
                self.store.snapshot()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::content::ContentItem;
    use crate::scenario::{Scenario, ScenarioStep};
    use crate::services::{MemoryContentRepository, MemoryScenarioRepository, NoopNotifier};
    use crate::types::DisplayConstraints;

    fn engine() -> PresentationEngine {
        let content = Arc::new(MemoryContentRepository::new());
        content.insert(ContentItem::from_raw("42", "Hymn", "one two three four\n\nfive"));
        let scenarios = Arc::new(MemoryScenarioRepository::new());
        scenarios.insert(Scenario::new(
            "s",
            "Service",
            vec![ScenarioStep::heading("Welcome"), ScenarioStep::text("hymn__42")],
        ));
        PresentationEngine::new(
            Arc::new(ScreenStore::new()),
            content,
            scenarios,
            Arc::new(DisplayConstraints::new(10, 2)),
            Arc::new(NoopNotifier),
        )
    }

    #[tokio::test]
    async fn starts_empty() {
        assert!(engine().get_state().is_empty());
    }

    #[tokio::test]
    async fn set_text_opens_hidden_first_page() {
        let engine = engine();
        let state = engine.set_text("songs/hymn__42", Some(0)).await.unwrap();
        assert_eq!(state.visible(), Some(false));
        let text = state.current_text().unwrap();
        assert_eq!(text.content, "one two\nthree");
        assert_eq!(text.total_pages, 2);
        assert_eq!(engine.get_state(), state);
    }

    #[tokio::test]
    async fn set_text_unknown_is_not_found() {
        let engine = engine();
        let err = engine.set_text("nope", None).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(engine.get_state().is_empty());
    }

    #[tokio::test]
    async fn navigate_step_updates_item() {
        let engine = engine();
        engine.set_scenario(&ScenarioId::new("s"), None).await.unwrap();
        let state = engine.navigate_step(Direction::Next).await;
        let ScreenState::Scenario(screen) = state else { panic!("expected scenario mode") };
        assert_eq!(screen.step_index, 1);
        assert_eq!(screen.current_item.as_text().unwrap().content_id.as_str(), "42");
    }

    #[tokio::test]
    async fn visibility_is_noop_when_empty() {
        let engine = engine();
        assert!(engine.toggle_visibility().is_empty());
        assert!(engine.set_visibility(true).is_empty());
    }
}
