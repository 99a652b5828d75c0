//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key together with its required modifiers
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key bindings
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Paging
    pub const PREVIOUS_PAGE: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const NEXT_PAGE: KeyBinding = KeyBinding::key(KeyCode::Right);

    // Raw mode swallows the signal, so Ctrl+C arrives as a key
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
}
