use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{Action, App};

/// Map a key press to an action. Unbound keys map to `None`.
///
/// Apart from Ctrl+C, bindings only fire without Ctrl, Alt or Super held.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Action::Quit);
    }
    if key
        .modifiers
        .intersects(KeyModifiers::ALT | KeyModifiers::SUPER | KeyModifiers::META)
    {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('h') | KeyCode::Left => Action::CollapseCurrent,
        KeyCode::Char('l') | KeyCode::Right => Action::ExpandCurrent,
        KeyCode::Enter => Action::ToggleCurrent,
        KeyCode::Char('g') | KeyCode::Home => Action::JumpToFirst,
        KeyCode::Char('G') | KeyCode::End => Action::JumpToLast,
        _ => return None,
    };
    Some(action)
}

/// Handle a key event.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if let Some(action) = action_for_key(key) {
        app.apply(action);
    }
}

/// Handle a mouse event: the wheel moves the cursor, a left click selects.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let action = match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::MoveDown),
        MouseEventKind::ScrollUp => Some(Action::MoveUp),
        MouseEventKind::Down(MouseButton::Left) => {
            app.row_at(mouse.column, mouse.row).map(Action::Select)
        }
        _ => None,
    };
    if let Some(action) = action {
        app.apply(action);
    }
}
