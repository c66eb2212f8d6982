use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termjack_core::TableAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Table(TableAction),
    Redraw,
    Ignore,
}

pub fn map_event(event: CEvent) -> InputAction {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => InputAction::Table(map_key(key)),
        CEvent::Resize(_, _) => InputAction::Redraw,
        _ => InputAction::Ignore,
    }
}

pub fn map_key(key: KeyEvent) -> TableAction {
    match key.code {
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => TableAction::None,
        KeyCode::Char(c) => TableAction::from_key(c),
        _ => TableAction::None,
    }
}
