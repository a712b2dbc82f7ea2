//! Input/render shell for turn-based terminal games.
//!
//! This crate is the orchestration layer between a keyboard-driven terminal
//! and an external game engine. It owns no game rules: the engine lives
//! behind the [`GameController`] trait, the display behind [`TerminalView`],
//! and the shell maps key presses to actions, runs one turn per press, and
//! repaints when a turn changed anything.
//!
//! # Module Structure
//!
//! - [`types`]: Raw key codes, [`Direction`] and [`KeyAction`]
//! - [`input`]: Static key-binding table and crossterm key translation
//! - [`controller`]: The [`GameController`] capability contract
//! - [`term`]: The [`TerminalView`] contract and the crossterm-backed
//!   [`TerminalRenderer`]
//! - [`app`]: [`InputRenderLoop`], the shell itself
//!
//! # Input Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | ← or H | Move left |
//! | → or L | Move right |
//! | ↑ or K | Move up |
//! | ↓ or J | Move down |
//! | N | New game |
//! | Q | Quit |
//! | Ctrl+C | Quit |
//!
//! Rendering is a full clear + repaint per turn. A move the engine rejects
//! leaves the screen untouched; any other key press repaints.
//!
//! # Example
//!
//! ```no_run
//! use tui_game_shell::{Direction, GameController, InputRenderLoop, TerminalRenderer};
//!
//! struct Noop;
//!
//! impl GameController for Noop {
//!     type Frame = String;
//!     fn start_new_game(&mut self) {}
//!     fn action(&mut self, _direction: Direction) {}
//!     fn advance_turn(&mut self) -> bool { true }
//!     fn render(&self) -> String { String::new() }
//! }
//!
//! let mut term = TerminalRenderer::new();
//! term.enter().unwrap();
//! let mut engine = Noop;
//! InputRenderLoop::new(&mut engine, &mut term)
//!     .and_then(|mut app| app.run())
//!     .unwrap();
//! term.exit().unwrap();
//! ```

pub mod app;
pub mod controller;
pub mod input;
pub mod term;
pub mod types;

// Re-export commonly used items
pub use app::{InputRenderLoop, TurnOutcome};
pub use controller::GameController;
pub use input::{raw_key_code, resolve_key, should_quit};
pub use term::{TerminalRenderer, TerminalView};
pub use types::{Direction, KeyAction, RawKey};
