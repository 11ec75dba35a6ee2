//! Key binding dispatch for the control panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::reader::Command;

use super::app::PanelApp;

/// Handle a key event, mutating panel state.
pub fn handle_key(app: &mut PanelApp, key: KeyEvent) {
    // Global bindings
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match key.code {
        KeyCode::Char('i') => app.toggle_inventory(),
        KeyCode::Char('g') => app.dispatch(Command::GetSelect),
        KeyCode::Char('s') => app.dispatch(Command::SetSelect),
        KeyCode::Char('m') => app.dispatch(Command::SetSelectMode),
        KeyCode::Char('w') => app.dispatch(Command::WriteMemory),
        KeyCode::Char('l') => app.dispatch(Command::LockMemory),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('G') => app.scroll_to_tail(),
        _ => {}
    }
}
