//! Terminal key events to session messages.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Key, KeyPress, Message};

/// Translate a crossterm event into a message, if the session cares.
pub fn translate_event(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Paste(text) => Some(Message::BeforeInput(text)),
        _ => None,
    }
}

/// Translate a key event.
///
/// Releases are dropped. `Repeat` events keep their repeat flag so the
/// session can ignore held-down Tab.
pub fn translate_key(key: KeyEvent) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let press = KeyPress {
        key: Key::Tab,
        shift: key.modifiers.contains(KeyModifiers::SHIFT),
        repeat: key.kind == KeyEventKind::Repeat,
    };
    let down = |code: Key| Some(Message::KeyDown(KeyPress { key: code, ..press }));

    match key.code {
        KeyCode::Tab => down(Key::Tab),
        // Most terminals report Shift+Tab as its own key code.
        KeyCode::BackTab => Some(Message::KeyDown(KeyPress {
            shift: true,
            ..press
        })),
        KeyCode::Enter => Some(Message::BeforeInput("\n".to_string())),
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(Message::BeforeInput(c.to_string()))
        }
        KeyCode::Backspace => down(Key::Backspace),
        KeyCode::Delete => down(Key::Delete),
        KeyCode::Left => down(Key::Left),
        KeyCode::Right => down(Key::Right),
        KeyCode::Home => down(Key::Home),
        KeyCode::End => down(Key::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::NONE, KeyEventKind::Press)
    }

    #[test]
    fn test_tab_press() {
        assert_eq!(
            translate_key(press(KeyCode::Tab)),
            Some(Message::KeyDown(KeyPress::new(Key::Tab)))
        );
    }

    #[test]
    fn test_back_tab_is_shifted_tab() {
        assert_eq!(
            translate_key(press(KeyCode::BackTab)),
            Some(Message::KeyDown(KeyPress::new(Key::Tab).with_shift()))
        );
    }

    #[test]
    fn test_tab_with_shift_modifier() {
        let event = key(KeyCode::Tab, KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(
            translate_key(event),
            Some(Message::KeyDown(KeyPress::new(Key::Tab).with_shift()))
        );
    }

    #[test]
    fn test_repeat_kind_sets_repeat_flag() {
        let event = key(KeyCode::Tab, KeyModifiers::NONE, KeyEventKind::Repeat);
        assert_eq!(
            translate_key(event),
            Some(Message::KeyDown(KeyPress::new(Key::Tab).repeated()))
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let event = key(KeyCode::Tab, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(translate_key(event), None);
    }

    #[test]
    fn test_enter_becomes_newline_input() {
        assert_eq!(
            translate_key(press(KeyCode::Enter)),
            Some(Message::BeforeInput("\n".to_string()))
        );
    }

    #[test]
    fn test_chars_become_input_unless_ctrl_or_alt() {
        assert_eq!(
            translate_key(press(KeyCode::Char('x'))),
            Some(Message::BeforeInput("x".to_string()))
        );
        let upper = key(KeyCode::Char('X'), KeyModifiers::SHIFT, KeyEventKind::Press);
        assert_eq!(translate_key(upper), Some(Message::BeforeInput("X".to_string())));
        let ctrl = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(translate_key(ctrl), None);
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            translate_key(press(KeyCode::Backspace)),
            Some(Message::KeyDown(KeyPress::new(Key::Backspace)))
        );
        assert_eq!(
            translate_key(press(KeyCode::Home)),
            Some(Message::KeyDown(KeyPress::new(Key::Home)))
        );
        assert_eq!(translate_key(press(KeyCode::F(1))), None);
    }

    #[test]
    fn test_paste_is_input() {
        assert_eq!(
            translate_event(Event::Paste("- a".to_string())),
            Some(Message::BeforeInput("- a".to_string()))
        );
        assert_eq!(translate_event(Event::FocusGained), None);
    }
}
