//! Page, slide and step movement.
//!
//! Pure functions over the current item and freshly loaded content; the
//! engine does the loading and the committing.

use crate::content::ContentItem;
use crate::paginator::page_count;
use crate::types::{Direction, DisplayConstraints};

use super::resolve::{build_text_item, clamp_index, PageSelect};
use super::TextItem;

/// Move one page through a text document, crossing slide boundaries.
///
/// Indices held in `item` are clamped against the current `content` first,
/// since the document may have been edited since `item` was built. Returns
/// `None` when already at the first/last page of the first/last slide.
pub fn step_text(
    item: &TextItem,
    content: &ContentItem,
    direction: Direction,
    constraints: &DisplayConstraints,
) -> Option<TextItem> {
    let total_slides = content.slide_count();
    if total_slides == 0 {
        return None;
    }

    let slide_index = clamp_index(item.slide_index, total_slides);
    let pages = page_count(content.slide(slide_index).unwrap_or_default(), constraints);
    let page_index = clamp_index(item.page_index, pages);

    let (slide, page) = match direction {
        Direction::Next if page_index + 1 < pages => (slide_index, PageSelect::At(page_index + 1)),
        Direction::Next if slide_index + 1 < total_slides => (slide_index + 1, PageSelect::First),
        Direction::Prev if page_index > 0 => (slide_index, PageSelect::At(page_index - 1)),
        Direction::Prev if slide_index > 0 => (slide_index - 1, PageSelect::Last),
        Direction::Next | Direction::Prev => return None,
    };

    Some(build_text_item(
        item.content_id.clone(),
        Some(content),
        slide,
        page,
        constraints,
    ))
}

/// Target step index one step in `direction`, saturating at both ends.
pub const fn step_index(current: usize, total_steps: usize, direction: Direction) -> usize {
    let target = match direction {
        Direction::Next => current.saturating_add(1),
        Direction::Prev => current.saturating_sub(1),
    };
    clamp_index(target, total_steps)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::ContentId;

    // Slide 0 has two pages, slides 1 and 2 one page each.
    fn doc() -> ContentItem {
        ContentItem::new(
            "42",
            "Hymn",
            vec![
                "one two three four".to_string(),
                "five".to_string(),
                "six".to_string(),
            ],
        )
    }

    fn c() -> DisplayConstraints {
        DisplayConstraints::new(10, 2)
    }

    fn at(slide: usize, page: PageSelect) -> TextItem {
        build_text_item(ContentId::new("42"), Some(&doc()), slide, page, &c())
    }

    #[test]
    fn next_advances_page_then_slide() {
        let first = at(0, PageSelect::First);
        let second = step_text(&first, &doc(), Direction::Next, &c()).unwrap();
        assert_eq!((second.slide_index, second.page_index), (0, 1));
        assert_eq!(second.content, "four");

        let third = step_text(&second, &doc(), Direction::Next, &c()).unwrap();
        assert_eq!((third.slide_index, third.page_index), (1, 0));
        assert_eq!(third.total_pages, 1);
        assert_eq!(third.content, "five");
    }

    #[test]
    fn next_at_end_is_none() {
        let last = at(2, PageSelect::Last);
        assert!(step_text(&last, &doc(), Direction::Next, &c()).is_none());
    }

    #[test]
    fn prev_enters_previous_slide_on_last_page() {
        let item = at(1, PageSelect::First);
        let prev = step_text(&item, &doc(), Direction::Prev, &c()).unwrap();
        assert_eq!((prev.slide_index, prev.page_index), (0, 1));
        assert_eq!(prev.total_pages, 2);
        assert_eq!(prev.content, "four");
    }

    #[test]
    fn prev_at_start_is_none() {
        let first = at(0, PageSelect::First);
        assert!(step_text(&first, &doc(), Direction::Prev, &c()).is_none());
    }

    #[test]
    fn stale_indices_are_clamped() {
        let mut item = at(2, PageSelect::First);
        item.slide_index = 9;
        item.page_index = 4;
        let shrunk = ContentItem::new("42", "Hymn", vec!["a".to_string(), "b".to_string()]);
        let prev = step_text(&item, &shrunk, Direction::Prev, &c()).unwrap();
        assert_eq!((prev.slide_index, prev.page_index), (0, 0));
        assert_eq!(prev.total_slides, 2);
    }

    #[test]
    fn empty_document_never_moves() {
        let item = at(0, PageSelect::First);
        let empty = ContentItem::new("42", "Hymn", Vec::new());
        assert!(step_text(&item, &empty, Direction::Next, &c()).is_none());
    }

    #[test]
    fn step_index_saturates() {
        assert_eq!(step_index(0, 3, Direction::Prev), 0);
        assert_eq!(step_index(2, 3, Direction::Next), 2);
        assert_eq!(step_index(1, 3, Direction::Next), 2);
        assert_eq!(step_index(7, 3, Direction::Prev), 2);
    }
}
