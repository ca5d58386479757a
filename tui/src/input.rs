//! Keyboard handling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Upper bound on events applied per frame so a flood of input can't starve
/// rendering.
pub const MAX_EVENTS_PER_FRAME: usize = 64;

/// Drains pending terminal events without blocking. Returns whether the app
/// should quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME && event::poll(Duration::ZERO)? {
        apply_event(app, event::read()?);
        if app.should_quit() {
            break;
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

pub fn apply_event(app: &mut App, event: Event) {
    if let Event::Key(key) = event {
        handle_key(app, key);
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Char('r') => app.reset_failed(),
        _ => {}
    }
}
