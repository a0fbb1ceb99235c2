//! Text pagination.
//!
//! Reflows one slide of text into screen-sized pages. Everything here is a pure
//! function of its inputs: the engine recomputes pages on every navigation step
//! and relies on identical inputs producing identical pages.

use crate::types::DisplayConstraints;

/// Split a slide into pages that fit the given constraints.
///
/// Blank input yields exactly one empty page, never zero pages.
pub fn format_to_pages(slide: &str, constraints: &DisplayConstraints) -> Vec<String> {
    let text = slide.trim();
    if text.is_empty() {
        return vec![String::new()];
    }

    let lines = wrap_lines(text, constraints.line_width());
    paginate(&lines, constraints.page_height())
}

/// Wrap text into lines of at most `max_chars` characters.
///
/// Existing line breaks are kept as hard breaks and blank lines survive as
/// empty lines. Words longer than the limit are cut into fixed-width chunks.
/// A non-positive limit disables wrapping and returns the text as one line.
pub fn split_into_lines(text: &str, max_chars: i32) -> Vec<String> {
    wrap_lines(text, DisplayConstraints::new(max_chars, 0).line_width())
}

fn wrap_lines(text: &str, width: Option<usize>) -> Vec<String> {
    let Some(width) = width else {
        return vec![text.to_string()];
    };

    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, width, &mut lines);
    }
    lines
}

fn wrap_segment(segment: &str, width: usize, out: &mut Vec<String>) {
    let mut words = segment.split_whitespace().peekable();
    if words.peek().is_none() {
        out.push(String::new());
        return;
    }

    let mut line = String::new();
    let mut line_len = 0usize;

    for word in words {
        let word_len = word.chars().count();

        if word_len > width {
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
                line_len = 0;
            }
            push_chunks(word, width, out);
            continue;
        }

        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + 1 + word_len < width {
            // joined line must stay strictly under the limit
            line.push(' ');
            line.push_str(word);
            line_len += 1 + word_len;
        } else {
            out.push(std::mem::replace(&mut line, word.to_string()));
            line_len = word_len;
        }
    }

    if !line.is_empty() {
        out.push(line);
    }
}

fn push_chunks(word: &str, width: usize, out: &mut Vec<String>) {
    let chars: Vec<char> = word.chars().collect();
    out.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
}

/// Group lines into newline-joined pages of at most `max_lines` lines.
///
/// The trailing partial page is kept. No lines yields one empty page, and a
/// non-positive limit puts every line on a single page.
pub fn split_lines_into_pages(lines: &[String], max_lines: i32) -> Vec<String> {
    paginate(lines, DisplayConstraints::new(0, max_lines).page_height())
}

fn paginate(lines: &[String], height: Option<usize>) -> Vec<String> {
    if lines.is_empty() {
        return vec![String::new()];
    }

    match height {
        Some(height) => lines.chunks(height).map(|page| page.join("\n")).collect(),
        None => vec![lines.join("\n")],
    }
}

/// Number of pages a slide occupies under the given constraints.
pub fn page_count(slide: &str, constraints: &DisplayConstraints) -> usize {
    format_to_pages(slide, constraints).len()
}
