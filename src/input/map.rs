//! Key binding table from raw key codes to game actions.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::types::{
    Direction, KeyAction, RawKey, KEY_DOWN, KEY_H, KEY_J, KEY_K, KEY_L, KEY_LEFT, KEY_N,
    KEY_RIGHT, KEY_UP,
};

/// Default bindings: arrow keys plus vi-style `hjkl` for movement, `n` for
/// a new game. Several codes may share an action; a code may appear once.
pub const KEY_BINDINGS: &[(RawKey, KeyAction)] = &[
    (KEY_LEFT, KeyAction::Move(Direction::Left)),
    (KEY_H, KeyAction::Move(Direction::Left)),
    (KEY_RIGHT, KeyAction::Move(Direction::Right)),
    (KEY_L, KeyAction::Move(Direction::Right)),
    (KEY_UP, KeyAction::Move(Direction::Up)),
    (KEY_K, KeyAction::Move(Direction::Up)),
    (KEY_DOWN, KeyAction::Move(Direction::Down)),
    (KEY_J, KeyAction::Move(Direction::Down)),
    (KEY_N, KeyAction::NewGame),
];

static BINDINGS: OnceLock<HashMap<RawKey, KeyAction>> = OnceLock::new();

/// Binding table, materialized and checked on first use.
///
/// Panics if [`KEY_BINDINGS`] maps the same code twice.
fn bindings() -> &'static HashMap<RawKey, KeyAction> {
    BINDINGS.get_or_init(|| {
        let mut map = HashMap::with_capacity(KEY_BINDINGS.len());
        for &(code, action) in KEY_BINDINGS {
            if map.insert(code, action).is_some() {
                panic!("duplicate key binding for code {}", code);
            }
        }
        map
    })
}

/// Resolve a raw key code to its bound action, `None` when unbound.
pub fn resolve_key(code: RawKey) -> Option<KeyAction> {
    bindings().get(&code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(resolve_key(37), Some(KeyAction::Move(Direction::Left)));
        assert_eq!(resolve_key(39), Some(KeyAction::Move(Direction::Right)));
        assert_eq!(resolve_key(38), Some(KeyAction::Move(Direction::Up)));
        assert_eq!(resolve_key(40), Some(KeyAction::Move(Direction::Down)));
    }

    #[test]
    fn test_vi_style_keys() {
        assert_eq!(resolve_key(72), Some(KeyAction::Move(Direction::Left)));
        assert_eq!(resolve_key(76), Some(KeyAction::Move(Direction::Right)));
        assert_eq!(resolve_key(75), Some(KeyAction::Move(Direction::Up)));
        assert_eq!(resolve_key(74), Some(KeyAction::Move(Direction::Down)));
    }

    #[test]
    fn test_new_game_key() {
        assert_eq!(resolve_key(78), Some(KeyAction::NewGame));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(resolve_key(65), None);
        assert_eq!(resolve_key(81), None);
        assert_eq!(resolve_key(0), None);
    }

    #[test]
    fn test_table_has_no_duplicate_codes() {
        for (i, (code, _)) in KEY_BINDINGS.iter().enumerate() {
            for (other, _) in &KEY_BINDINGS[i + 1..] {
                assert_ne!(code, other, "code {} bound twice", code);
            }
        }
    }

    #[test]
    fn test_every_table_entry_resolves() {
        for &(code, action) in KEY_BINDINGS {
            assert_eq!(resolve_key(code), Some(action));
        }
    }
}
