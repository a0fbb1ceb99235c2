//! User interface components.
//!
//! Draws the operator console: what mode the screen is in, a preview of the
//! projected item, and a status bar.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::input::KEY_HELP;
use crate::screen::{DisplayItem, ScreenState};

/// Render the full console to the terminal frame.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3), // Status bar at bottom
        ])
        .split(f.size());

    draw_header(f, app.state(), chunks[0]);
    draw_preview(f, app.state(), chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

/// Create a bordered block with a title, highlighted when `active`.
pub fn create_titled_block(title: &str, active: bool) -> Block<'_> {
    let color = if active { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(title, Style::default().fg(color)))
}

fn draw_header(f: &mut Frame, state: &ScreenState, area: Rect) {
    let mut spans = vec![Span::styled(
        state.mode_name().to_uppercase(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if let ScreenState::Scenario(screen) = state {
        spans.push(Span::raw(format!(
            "  {}  step {}/{}",
            screen.scenario_title,
            screen.step_index + 1,
            screen.total_steps
        )));
    }

    if let Some(visible) = state.visible() {
        let (label, color) = if visible { ("  LIVE", Color::Green) } else { ("  HIDDEN", Color::Red) };
        spans.push(Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(create_titled_block("Screen", true)),
        area,
    );
}

fn draw_preview(f: &mut Frame, state: &ScreenState, area: Rect) {
    let live = state.visible().unwrap_or(false);
    let text_style = if live {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (title, body) = match state.current_item() {
        None => ("Preview".to_string(), vec![Line::from("(nothing on screen)")]),
        Some(DisplayItem::Text(text)) => (
            format!(
                "Text {}  slide {}/{}  page {}/{}",
                text.content_id,
                text.slide_index + 1,
                text.total_slides,
                text.page_index + 1,
                text.total_pages
            ),
            text.content.lines().map(|l| Line::from(l.to_string())).collect(),
        ),
        Some(DisplayItem::Heading { text }) => (
            "Heading".to_string(),
            vec![Line::styled(text.clone(), text_style.add_modifier(Modifier::BOLD))],
        ),
        Some(DisplayItem::Blank) => ("Blank".to_string(), Vec::new()),
        Some(item @ (DisplayItem::Image { .. } | DisplayItem::Video { .. } | DisplayItem::Audio { .. })) => {
            let path = item.as_media().map_or("", |(_, path)| path);
            (item.kind_name().to_string(), vec![Line::from(path.to_string())])
        }
    };

    let preview = Paragraph::new(body)
        .style(text_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(create_titled_block(&title, live));
    f.render_widget(preview, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(error) = app.error_message() {
        Line::styled(error.to_string(), Style::default().fg(Color::Red))
    } else if let Some(status) = app.status_message() {
        Line::styled(status.to_string(), Style::default().fg(Color::Yellow))
    } else {
        let help = KEY_HELP
            .iter()
            .map(|(key, action)| format!("{key} {action}"))
            .collect::<Vec<_>>()
            .join("  ");
        Line::from(help)
    };

    let constraints = app.constraints();
    let title = format!(
        "{} chars × {} lines  ·  {} updates",
        constraints.max_chars_per_line,
        constraints.max_lines_per_page,
        app.changes_seen()
    );
    f.render_widget(
        Paragraph::new(line).block(create_titled_block(&title, false)),
        area,
    );
}
