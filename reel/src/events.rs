//! Event handling for the slideshow TUI.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::ui::Overlay;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event, now_ms: u64) -> EventResult {
    let result = match event {
        Event::Key(key) => handle_key_event(app, key, now_ms),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    };
    // Selection and status are per-slide; reconcile after any command
    // that may have moved the cursor.
    app.sync_slide(now_ms);
    result
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent, now_ms: u64) -> EventResult {
    // Handle overlay keys first
    if app.has_overlay() {
        return handle_overlay_key(app, key);
    }

    // Global shortcuts (always work)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match key.code {
        KeyCode::Char('q') => EventResult::Quit,

        // Help
        KeyCode::Char('?') | KeyCode::F(1) => {
            app.toggle_help();
            EventResult::NeedsRedraw
        }

        // Scene menu
        KeyCode::Char('m') => {
            app.open_menu();
            EventResult::NeedsRedraw
        }

        // Presentation mode
        KeyCode::Char('t') => {
            app.cycle_mode();
            EventResult::NeedsRedraw
        }

        // Restart the show
        KeyCode::Char('r') => {
            app.restart();
            EventResult::NeedsRedraw
        }

        // Linear navigation
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            app.try_advance();
            EventResult::NeedsRedraw
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            app.retreat();
            EventResult::NeedsRedraw
        }

        // Word-bank selection
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_selection(now_ms);
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).unwrap_or(1) as usize;
            app.select_and_submit(index - 1, now_ms);
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle key when an overlay is open.
fn handle_overlay_key(app: &mut App, key: KeyEvent) -> EventResult {
    let is_menu = matches!(app.overlay(), Some(Overlay::SceneMenu));

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        KeyCode::Down | KeyCode::Char('j') if is_menu => {
            app.menu_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Up | KeyCode::Char('k') if is_menu => {
            app.menu_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter if is_menu => {
            app.menu_select();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.close_overlay();
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
