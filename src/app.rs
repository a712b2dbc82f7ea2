//! Input/render loop: the application shell around a game engine.
//!
//! [`InputRenderLoop`] wires a [`GameController`] to a [`TerminalView`]: it
//! resolves raw key codes into actions, sequences the engine calls for one
//! turn per key press, and repaints the view when the turn changed anything
//! worth showing. It owns no game state of its own.

use anyhow::Result;
use tracing::{debug, info};

use crate::controller::GameController;
use crate::input::resolve_key;
use crate::term::TerminalView;
use crate::types::{KeyAction, RawKey};

/// Outcome of one key event, consumed by the render decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The engine accepted the move and the board changed.
    MoveApplied,
    /// The engine rejected the move; the board is unchanged.
    MoveRejected,
    /// A new game was started.
    GameRestarted,
    /// The key is not bound; the current frame is repainted as-is.
    Unrecognized,
}

impl TurnOutcome {
    /// Whether this outcome warrants a repaint.
    ///
    /// Rejected moves leave the board untouched, so the redraw is skipped.
    /// Unbound keys still repaint the current frame.
    pub fn needs_render(self) -> bool {
        !matches!(self, TurnOutcome::MoveRejected)
    }
}

/// The input/render orchestration loop.
///
/// Holds exclusive borrows of both collaborators for its lifetime, so no
/// other writer can touch the engine while the loop is live. Construction
/// claims the view's key stream; [`stop`](InputRenderLoop::stop) (or drop)
/// releases it.
pub struct InputRenderLoop<'a, C, V>
where
    C: GameController,
    V: TerminalView<Frame = C::Frame>,
{
    controller: &'a mut C,
    view: &'a mut V,
    subscribed: bool,
}

impl<'a, C, V> InputRenderLoop<'a, C, V>
where
    C: GameController,
    V: TerminalView<Frame = C::Frame>,
{
    /// Wire the loop to its collaborators and claim the key stream.
    ///
    /// Fails if the view's key stream is already subscribed.
    pub fn new(controller: &'a mut C, view: &'a mut V) -> Result<Self> {
        view.subscribe()?;
        Ok(Self {
            controller,
            view,
            subscribed: true,
        })
    }

    /// Start a fresh game and paint the first frame.
    pub fn start(&mut self) -> Result<()> {
        info!("session started");
        self.controller.start_new_game();
        self.render()
    }

    /// Handle one key press: resolve, dispatch, repaint if warranted.
    ///
    /// Invoked once per delivered key; calls never overlap.
    pub fn on_key(&mut self, key: RawKey) -> Result<TurnOutcome> {
        let outcome = self.dispatch(resolve_key(key));
        debug!(key, ?outcome, "key event");
        if outcome.needs_render() {
            self.render()?;
        }
        Ok(outcome)
    }

    /// Drive the loop until the view's key stream ends, then stop.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        while let Some(key) = self.view.next_key()? {
            self.on_key(key)?;
        }
        self.stop();
        Ok(())
    }

    /// Release the key stream. Further `run` pumps end immediately.
    pub fn stop(&mut self) {
        if self.subscribed {
            self.view.unsubscribe();
            self.subscribed = false;
            info!("session stopped");
        }
    }

    fn dispatch(&mut self, action: Option<KeyAction>) -> TurnOutcome {
        match action {
            Some(KeyAction::Move(direction)) => {
                self.controller.action(direction);
                if self.controller.advance_turn() {
                    TurnOutcome::MoveApplied
                } else {
                    TurnOutcome::MoveRejected
                }
            }
            Some(KeyAction::NewGame) => {
                info!("new game");
                self.controller.start_new_game();
                TurnOutcome::GameRestarted
            }
            None => TurnOutcome::Unrecognized,
        }
    }

    /// Full repaint: clear, fetch the frame, write it through.
    fn render(&mut self) -> Result<()> {
        self.view.clear()?;
        let frame = self.controller.render();
        self.view.write(&frame)
    }
}

impl<C, V> Drop for InputRenderLoop<'_, C, V>
where
    C: GameController,
    V: TerminalView<Frame = C::Frame>,
{
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_render() {
        assert!(TurnOutcome::MoveApplied.needs_render());
        assert!(TurnOutcome::GameRestarted.needs_render());
        assert!(TurnOutcome::Unrecognized.needs_render());
        assert!(!TurnOutcome::MoveRejected.needs_render());
    }
}
