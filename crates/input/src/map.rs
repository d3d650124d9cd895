//! Key and mouse mapping from terminal events to game input.

use crate::types::{Direction, InputEvent, Point};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map keyboard input to game input.
///
/// Digits pick an offering slot (`1` is the first), arrows and hjkl/wasd
/// nudge, Enter or space confirms, `r` restarts. Key releases are ignored.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(c @ '1'..='9') => Some(InputEvent::SelectSlot(c as u8 - b'1')),

        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => {
            Some(InputEvent::Nudge(Direction::Left))
        }
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => {
            Some(InputEvent::Nudge(Direction::Right))
        }
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => {
            Some(InputEvent::Nudge(Direction::Up))
        }
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => {
            Some(InputEvent::Nudge(Direction::Down))
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvent::Confirm),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),

        _ => None,
    }
}

/// Surface position of a terminal cell: its centre, one unit per character
pub fn mouse_point(column: u16, row: u16) -> Point {
    Point::new(column as f32 + 0.5, row as f32 + 0.5)
}

/// Map left-button mouse input to pointer events.
pub fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    let point = mouse_point(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::SelectAt(point)),
        MouseEventKind::Drag(MouseButton::Left) => Some(InputEvent::DragTo(point)),
        MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::Release),
        _ => None,
    }
}

/// Map any terminal event; resizes and focus changes map to nothing.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_keys_select_slots() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('1'))),
            Some(InputEvent::SelectSlot(0))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('3'))),
            Some(InputEvent::SelectSlot(2))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('9'))),
            Some(InputEvent::SelectSlot(8))
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(InputEvent::Nudge(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::Nudge(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('J'))),
            Some(InputEvent::Nudge(Direction::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(InputEvent::Nudge(Direction::Right))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputEvent::Confirm)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(InputEvent::Restart)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_mouse_left_button_drives_pointer() {
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 4)),
            Some(InputEvent::SelectAt(Point::new(10.5, 4.5)))
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 12, 5)),
            Some(InputEvent::DragTo(Point::new(12.5, 5.5)))
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 12, 5)),
            Some(InputEvent::Release)
        );
        assert_eq!(
            map_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(map_mouse(mouse(MouseEventKind::Moved, 1, 1)), None);
    }

    #[test]
    fn test_resize_maps_to_nothing() {
        assert_eq!(map_event(&Event::Resize(80, 24)), None);
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char('2')))),
            Some(InputEvent::SelectSlot(1))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
