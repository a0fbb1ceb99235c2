//! Display state.
//!
//! [`ScreenState`] is the single answer to "what is on the projector right
//! now". It is held by a [`ScreenStore`] owned by the engine; every reader gets
//! a clone, never a reference into the store.

use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::types::{ContentId, MediaKind, ScenarioId};

pub mod engine;
pub mod navigation;
pub mod resolve;

pub use engine::PresentationEngine;

/// A paginated view into a text document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    /// Resolved document id (slug prefix stripped).
    pub content_id: ContentId,
    /// Current slide.
    pub slide_index: usize,
    /// Current page within the slide.
    pub page_index: usize,
    /// Slide count of the document when this item was built.
    pub total_slides: usize,
    /// Page count of the current slide when this item was built.
    pub total_pages: usize,
    /// Text of the current page.
    pub content: String,
}

/// Screen-ready representation of whatever is currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DisplayItem {
    /// A page of a text document.
    Text(TextItem),
    /// Still image.
    Image {
        /// Relative media path.
        path: String,
    },
    /// Video clip.
    Video {
        /// Relative media path.
        path: String,
    },
    /// Audio track.
    Audio {
        /// Relative media path.
        path: String,
    },
    /// Section divider.
    Heading {
        /// Heading text.
        text: String,
    },
    /// Empty slide.
    Blank,
}

impl DisplayItem {
    /// Media item of the given kind.
    pub fn media(kind: MediaKind, path: impl Into<String>) -> Self {
        let path = path.into();
        match kind {
            MediaKind::Image => Self::Image { path },
            MediaKind::Video => Self::Video { path },
            MediaKind::Audio => Self::Audio { path },
        }
    }

    /// Heading item.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    /// The text view, if this is a text item.
    pub const fn as_text(&self) -> Option<&TextItem> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Media kind and path, if this is a media item.
    pub fn as_media(&self) -> Option<(MediaKind, &str)> {
        match self {
            Self::Image { path } => Some((MediaKind::Image, path)),
            Self::Video { path } => Some((MediaKind::Video, path)),
            Self::Audio { path } => Some((MediaKind::Audio, path)),
            Self::Text(_) | Self::Heading { .. } | Self::Blank => None,
        }
    }

    /// Wire name of this item's kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image { .. } => "image",
            Self::Video { .. } => "video",
            Self::Audio { .. } => "audio",
            Self::Heading { .. } => "heading",
            Self::Blank => "blank",
        }
    }
}

const fn visible_by_default() -> bool {
    true
}

/// One ad-hoc item on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleScreen {
    /// Whether the item is projected. Absent on the wire means visible.
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    /// The item.
    pub item: DisplayItem,
}

/// A position within a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioScreen {
    /// Whether the current step is projected. Absent on the wire means visible.
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    /// Scenario id.
    pub scenario_id: ScenarioId,
    /// Scenario title.
    pub scenario_title: String,
    /// Current step.
    pub step_index: usize,
    /// Step count of the scenario.
    pub total_steps: usize,
    /// The resolved current step.
    pub current_item: DisplayItem,
}

/// What the projector shows. Exactly one mode is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ScreenState {
    /// Nothing displayed.
    #[default]
    Empty,
    /// One manually chosen item.
    Single(SingleScreen),
    /// A position within a playlist.
    Scenario(ScenarioScreen),
}

impl ScreenState {
    /// Hidden ad-hoc item, as installed by `set_text`/`set_media`.
    pub const fn single(item: DisplayItem) -> Self {
        Self::Single(SingleScreen { visible: false, item })
    }

    /// Wire name of the active mode.
    pub const fn mode_name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Single(_) => "single",
            Self::Scenario(_) => "scenario",
        }
    }

    /// Whether nothing is displayed.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Visibility flag, `None` in empty mode.
    pub const fn visible(&self) -> Option<bool> {
        match self {
            Self::Empty => None,
            Self::Single(single) => Some(single.visible),
            Self::Scenario(scenario) => Some(scenario.visible),
        }
    }

    /// Set the visibility flag. Returns `false` in empty mode.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        match self {
            Self::Empty => false,
            Self::Single(single) => {
                single.visible = visible;
                true
            }
            Self::Scenario(scenario) => {
                scenario.visible = visible;
                true
            }
        }
    }

    /// The item currently on screen.
    pub const fn current_item(&self) -> Option<&DisplayItem> {
        match self {
            Self::Empty => None,
            Self::Single(single) => Some(&single.item),
            Self::Scenario(scenario) => Some(&scenario.current_item),
        }
    }

    /// Mutable access to the item currently on screen.
    pub fn current_item_mut(&mut self) -> Option<&mut DisplayItem> {
        match self {
            Self::Empty => None,
            Self::Single(single) => Some(&mut single.item),
            Self::Scenario(scenario) => Some(&mut scenario.current_item),
        }
    }

    /// The text view currently on screen, in either mode.
    pub fn current_text(&self) -> Option<&TextItem> {
        self.current_item().and_then(DisplayItem::as_text)
    }
}

/// Owner of the one live [`ScreenState`].
///
/// Reads return clones. Writes replace the whole state; concurrent writers
/// resolve as last-write-wins.
#[derive(Debug, Default)]
pub struct ScreenStore {
    state: RwLock<ScreenState>,
}

impl ScreenStore {
    /// Create a store holding `Empty`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `state`.
    pub const fn with_state(state: ScreenState) -> Self {
        Self { state: RwLock::new(state) }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ScreenState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Install `state`, returning a copy of it.
    pub fn replace(&self, state: ScreenState) -> ScreenState {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = state;
        guard.clone()
    }

    /// Edit the state in place under the write lock.
    ///
    /// `f` returns whether it changed anything; the new copy is returned only then.
    pub fn modify<F>(&self, f: F) -> Option<ScreenState>
    where
        F: FnOnce(&mut ScreenState) -> bool,
    {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard).then(|| guard.clone())
    }
}
