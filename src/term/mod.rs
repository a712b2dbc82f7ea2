//! Terminal view module.
//!
//! The shell talks to the terminal through the [`TerminalView`] trait: a key
//! stream plus clear/write output. The default backend is
//! [`TerminalRenderer`], built on crossterm with a full clear + repaint per
//! frame (no diffing).

pub mod renderer;

use anyhow::Result;

use crate::types::RawKey;

/// Capability set the shell needs from a terminal.
pub trait TerminalView {
    /// Display payload accepted by [`write`](TerminalView::write).
    type Frame;

    /// Claim this view's key stream.
    ///
    /// At most one subscriber may be live; a second claim fails until
    /// [`unsubscribe`](TerminalView::unsubscribe) releases the first.
    fn subscribe(&mut self) -> Result<()>;

    /// Release the key stream. Idempotent.
    fn unsubscribe(&mut self);

    /// Block until the next key press.
    ///
    /// `Ok(None)` means the stream ended: the user asked to quit or the
    /// subscription was released.
    fn next_key(&mut self) -> Result<Option<RawKey>>;

    /// Clear previously written output.
    fn clear(&mut self) -> Result<()>;

    /// Write a frame to the display.
    fn write(&mut self, frame: &Self::Frame) -> Result<()>;
}

pub use renderer::TerminalRenderer;
