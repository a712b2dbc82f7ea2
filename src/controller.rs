//! Game controller contract consumed by the input/render loop.

use crate::types::Direction;

/// Capability set the shell needs from a game engine.
///
/// The engine owns all session state and rules. The shell only sequences
/// calls into it and forwards the rendered frame to the terminal, so the
/// methods here are total: an engine signals "nothing happened" through
/// [`advance_turn`](GameController::advance_turn), not through errors.
pub trait GameController {
    /// Opaque display payload, passed through to the terminal verbatim.
    type Frame;

    /// Reset the session to a fresh game.
    fn start_new_game(&mut self);

    /// Record the pending move for the next turn. Must not mutate the board.
    fn action(&mut self, direction: Direction);

    /// Apply the pending move. Returns `true` when the board changed and a
    /// redraw is warranted.
    fn advance_turn(&mut self) -> bool;

    /// Current display representation of the session.
    fn render(&self) -> Self::Frame;
}
