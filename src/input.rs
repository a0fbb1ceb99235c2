//! Input handling for the operator console.
//!
//! Maps key presses to console commands so the mapping can be tested without
//! a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// An operator action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Next page or slide of the text on screen.
    NextSlide,
    /// Previous page or slide of the text on screen.
    PrevSlide,
    /// Next scenario step.
    NextStep,
    /// Previous scenario step.
    PrevStep,
    /// Flip visibility.
    ToggleVisibility,
    /// Make the current item visible.
    Show,
    /// Hide the current item.
    Hide,
    /// Show nothing.
    Clear,
    /// One more character per line.
    WidenLines,
    /// One less character per line.
    NarrowLines,
    /// One more line per page.
    MoreLines,
    /// One less line per page.
    FewerLines,
    /// Leave the console.
    Quit,
}

/// Key help shown in the status bar.
pub const KEY_HELP: &[(&str, &str)] = &[
    ("←/→", "page"),
    ("↑/↓", "step"),
    ("v", "toggle"),
    ("s/h", "show/hide"),
    ("c", "clear"),
    ("+/-", "width"),
    ("[/]", "lines"),
    ("q", "quit"),
];

/// Command bound to `key`, if any. Key releases are ignored.
pub fn command_for_key(key: KeyEvent) -> Option<ConsoleCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(ConsoleCommand::Quit);
    }

    let command = match key.code {
        KeyCode::Right | KeyCode::Char(' ') => ConsoleCommand::NextSlide,
        KeyCode::Left => ConsoleCommand::PrevSlide,
        KeyCode::Down | KeyCode::PageDown => ConsoleCommand::NextStep,
        KeyCode::Up | KeyCode::PageUp => ConsoleCommand::PrevStep,
        KeyCode::Char('v') => ConsoleCommand::ToggleVisibility,
        KeyCode::Char('s') => ConsoleCommand::Show,
        KeyCode::Char('h') => ConsoleCommand::Hide,
        KeyCode::Char('c') => ConsoleCommand::Clear,
        KeyCode::Char('+' | '=') => ConsoleCommand::WidenLines,
        KeyCode::Char('-') => ConsoleCommand::NarrowLines,
        KeyCode::Char(']') => ConsoleCommand::MoreLines,
        KeyCode::Char('[') => ConsoleCommand::FewerLines,
        KeyCode::Char('q') | KeyCode::Esc => ConsoleCommand::Quit,
        _ => return None,
    };
    Some(command)
}
