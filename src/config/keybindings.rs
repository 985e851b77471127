//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to demo actions.
///
/// Provides vim-style defaults alongside arrow and page keys.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers take part in the lookup; press/repeat kind and
    /// keyboard state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };

        // Vim-style scrolling
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::Char('k'), KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Char('g'), KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::ScrollToBottom);

        // Arrow and page keys
        keys.bind(KeyCode::Up, KeyModifiers::NONE, KeyAction::ScrollUp);
        keys.bind(KeyCode::Down, KeyModifiers::NONE, KeyAction::ScrollDown);
        keys.bind(KeyCode::PageUp, KeyModifiers::NONE, KeyAction::PageUp);
        keys.bind(KeyCode::PageDown, KeyModifiers::NONE, KeyAction::PageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::PageUp);
        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::PageDown);
        keys.bind(KeyCode::Home, KeyModifiers::NONE, KeyAction::ScrollToTop);
        keys.bind(KeyCode::End, KeyModifiers::NONE, KeyAction::ScrollToBottom);

        // Streaming controls
        keys.bind(KeyCode::Char('s'), KeyModifiers::NONE, KeyAction::Start);
        keys.bind(KeyCode::Char('x'), KeyModifiers::NONE, KeyAction::Stop);
        keys.bind(KeyCode::Char('n'), KeyModifiers::NONE, KeyAction::Next);
        keys.bind(KeyCode::Char('a'), KeyModifiers::NONE, KeyAction::Auto);

        // Application controls
        keys.bind(KeyCode::Char('q'), KeyModifiers::NONE, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
