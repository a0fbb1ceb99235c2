//! Building display items from content and scenario steps.

use crate::content::ContentItem;
use crate::paginator::format_to_pages;
use crate::scenario::ScenarioStep;
use crate::services::ContentRepository;
use crate::types::{ContentId, DisplayConstraints};

use super::{DisplayItem, TextItem};

/// Which page of a slide to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelect {
    /// First page.
    First,
    /// Last page.
    Last,
    /// Specific page, clamped into range.
    At(usize),
}

/// Clamp `index` into `[0, len - 1]`; `0` when `len` is zero.
pub const fn clamp_index(index: usize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if index > last {
        last
    } else {
        index
    }
}

/// Paginate one slide of `content` and build the text item showing `page`.
///
/// Missing content behaves like a document with no slides: indices clamp to
/// zero and the page is empty.
pub fn build_text_item(
    content_id: ContentId,
    content: Option<&ContentItem>,
    slide_index: usize,
    page: PageSelect,
    constraints: &DisplayConstraints,
) -> TextItem {
    let slides = content.map_or(&[][..], |c| c.slides.as_slice());
    let total_slides = slides.len();
    let slide_index = clamp_index(slide_index, total_slides);
    let slide = slides.get(slide_index).map_or("", String::as_str);

    let mut pages = format_to_pages(slide, constraints);
    let total_pages = pages.len();
    let page_index = match page {
        PageSelect::First => 0,
        PageSelect::Last => total_pages.saturating_sub(1),
        PageSelect::At(index) => clamp_index(index, total_pages),
    };

    TextItem {
        content_id,
        slide_index,
        page_index,
        total_slides,
        total_pages,
        content: pages.swap_remove(page_index),
    }
}

/// Resolve a scenario step into a display item.
///
/// Dangling or unreadable text references degrade to an empty text item so a
/// scenario with one bad step stays navigable.
pub async fn resolve_step(
    step: &ScenarioStep,
    content: &dyn ContentRepository,
    constraints: &DisplayConstraints,
) -> DisplayItem {
    match step {
        ScenarioStep::Text(reference) => {
            let id = ContentId::from_reference(reference);
            let item = match content.find_by_id(&id).await {
                Ok(Some(item)) => Some(item),
                Ok(None) => {
                    tracing::warn!("Scenario step references missing text {reference:?}");
                    None
                }
                Err(e) => {
                    tracing::warn!("Failed to load text {reference:?} for scenario step: {e}");
                    None
                }
            };
            DisplayItem::Text(build_text_item(id, item.as_ref(), 0, PageSelect::First, constraints))
        }
        ScenarioStep::Media { kind, path } => DisplayItem::media(*kind, path.clone()),
        ScenarioStep::Heading(text) => DisplayItem::heading(text.clone()),
        ScenarioStep::Blank => DisplayItem::Blank,
    }
}
