//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::state::QUICK_ACTION_LIMIT;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
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
        let none = KeyModifiers::NONE;

        // Cursor
        keys.bind(KeyCode::Char('j'), none, KeyAction::CursorDown);
        keys.bind(KeyCode::Down, none, KeyAction::CursorDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::CursorUp);
        keys.bind(KeyCode::Up, none, KeyAction::CursorUp);
        keys.bind(KeyCode::Char('g'), none, KeyAction::CursorTop);
        keys.bind(KeyCode::Home, none, KeyAction::CursorTop);
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::CursorBottom);
        keys.bind(KeyCode::End, none, KeyAction::CursorBottom);

        // Layouts
        keys.bind(KeyCode::Tab, none, KeyAction::NextLayout);
        keys.bind(KeyCode::BackTab, KeyModifiers::SHIFT, KeyAction::PrevLayout);

        // Selection
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleSelect);
        keys.bind(KeyCode::Char('a'), none, KeyAction::ToggleSelectAll);
        keys.bind(KeyCode::Char('x'), none, KeyAction::ClearSelection);

        // Columns
        keys.bind(KeyCode::Char('c'), none, KeyAction::ColumnMenu);
        keys.bind(KeyCode::Char('r'), none, KeyAction::ResetColumns);

        // Bulk actions: digits 1..=3 pick the quick actions
        for (index, digit) in ('1'..='9').take(QUICK_ACTION_LIMIT).enumerate() {
            keys.bind(KeyCode::Char(digit), none, KeyAction::QuickAction(index));
        }
        keys.bind(KeyCode::Char('m'), none, KeyAction::OverflowMenu);
        keys.bind(KeyCode::Char('y'), none, KeyAction::Confirm);
        keys.bind(KeyCode::Char('n'), none, KeyAction::Cancel);
        keys.bind(KeyCode::Esc, none, KeyAction::Cancel);

        // Records
        keys.bind(KeyCode::Enter, none, KeyAction::Activate);
        keys.bind(KeyCode::Char('e'), none, KeyAction::Edit);
        keys.bind(KeyCode::Char('v'), none, KeyAction::View);

        // Application controls
        keys.bind(KeyCode::Char('?'), none, KeyAction::Help);
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);

        keys
    }
}
