//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Raw platform key code, the wire format for keyboard input.
///
/// Codes follow the classic keyboard `keyCode` convention: arrows are
/// 37..=40 and letters carry their uppercase ASCII value, so `h` and `H`
/// both arrive as 72.
pub type RawKey = u16;

/// Key codes referenced by the default bindings
pub const KEY_LEFT: RawKey = 37;
pub const KEY_UP: RawKey = 38;
pub const KEY_RIGHT: RawKey = 39;
pub const KEY_DOWN: RawKey = 40;
pub const KEY_H: RawKey = 72;
pub const KEY_J: RawKey = 74;
pub const KEY_K: RawKey = 75;
pub const KEY_L: RawKey = 76;
pub const KEY_N: RawKey = 78;

/// Directional move request, decoupled from the key that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Action bound to a key code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Record a directional move and advance the turn
    Move(Direction),
    /// Reset the session to a fresh game
    NewGame,
}
