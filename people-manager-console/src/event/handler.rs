//! Key event handling

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::console::Key;
use crate::error::{ConsoleError, ConsoleResult};
use crate::event::keymap::DefaultKeymap;

/// Block until a key press arrives and translate it
pub fn wait_for_key() -> ConsoleResult<Key> {
    loop {
        if let Event::Key(key_event) = event::read()?
            && let Some(key) = translate_key(&key_event)?
        {
            return Ok(key);
        }
    }
}

/// `None` for events that are not a press (release and repeat on Windows).
///
/// Ctrl+C ends input like a closed stream.
pub fn translate_key(key: &KeyEvent) -> ConsoleResult<Option<Key>> {
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    if DefaultKeymap::FORCE_QUIT.matches(key) {
        return Err(ConsoleError::InputClosed);
    }

    let translated = if DefaultKeymap::PREVIOUS_PAGE.matches(key) {
        Key::Left
    } else if DefaultKeymap::NEXT_PAGE.matches(key) {
        Key::Right
    } else {
        Key::Other
    };
    Ok(Some(translated))
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_map_to_paging_keys() {
        assert_eq!(
            translate_key(&press(KeyCode::Left, KeyModifiers::NONE)).unwrap(),
            Some(Key::Left)
        );
        assert_eq!(
            translate_key(&press(KeyCode::Right, KeyModifiers::NONE)).unwrap(),
            Some(Key::Right)
        );
    }

    #[test]
    fn shifted_arrow_is_other() {
        assert_eq!(
            translate_key(&press(KeyCode::Left, KeyModifiers::SHIFT)).unwrap(),
            Some(Key::Other)
        );
    }

    #[test]
    fn release_is_ignored() {
        let mut event = press(KeyCode::Enter, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate_key(&event).unwrap(), None);
    }

    #[test]
    fn ctrl_c_closes_input() {
        let result = translate_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
    }
}
