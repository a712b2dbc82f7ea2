//! Translation from crossterm key events to raw key codes.
//!
//! The shell speaks `keyCode`-style codes so the binding table stays
//! independent of the terminal backend. Letters fold to their uppercase
//! ASCII value, matching how keyboards report them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{RawKey, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};

/// Map a key event to its raw code.
///
/// Returns `None` for keys with no code in this convention (function keys,
/// bare modifiers, media keys); those never reach the binding table.
pub fn raw_key_code(key: KeyEvent) -> Option<RawKey> {
    match key.code {
        KeyCode::Left => Some(KEY_LEFT),
        KeyCode::Up => Some(KEY_UP),
        KeyCode::Right => Some(KEY_RIGHT),
        KeyCode::Down => Some(KEY_DOWN),
        KeyCode::Backspace => Some(8),
        KeyCode::Tab => Some(9),
        KeyCode::Enter => Some(13),
        KeyCode::Esc => Some(27),
        KeyCode::Char(' ') => Some(32),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
            Some(c.to_ascii_uppercase() as RawKey)
        }
        _ => None,
    }
}

/// Check if key should quit the session
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
