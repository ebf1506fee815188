//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Printable characters are left unbound (except with Ctrl) so
/// they reach the always-focused search field.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup; key kind and state
    /// (press/repeat, keypad flags) are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code, modifiers, action| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };

        // Carousel
        bind(KeyCode::Left, KeyModifiers::NONE, KeyAction::PrevPage);
        bind(KeyCode::Right, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::Tab, KeyModifiers::NONE, KeyAction::NextPage);
        bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevPage);

        // Entry list
        bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);

        // Search field editing
        bind(KeyCode::Backspace, KeyModifiers::NONE, KeyAction::DeleteBack);
        bind(KeyCode::Delete, KeyModifiers::NONE, KeyAction::DeleteForward);
        bind(KeyCode::Left, KeyModifiers::CONTROL, KeyAction::CursorLeft);
        bind(KeyCode::Right, KeyModifiers::CONTROL, KeyAction::CursorRight);
        bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::ClearQuery);

        // Application
        bind(KeyCode::Esc, KeyModifiers::NONE, KeyAction::Quit);
        bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        Self { bindings }
    }
}
