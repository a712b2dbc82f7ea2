//! TerminalRenderer: a crossterm-backed [`TerminalView`].
//!
//! Frames are plain strings written after a full clear. `next_key` blocks on
//! crossterm events and hands back raw key codes; `q` and `Ctrl+C` end the
//! stream instead of being delivered.

use std::io::{self, Write};

use anyhow::{bail, Result};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    style::Print,
    terminal, QueueableCommand,
};

use crate::input::{raw_key_code, should_quit};
use crate::term::TerminalView;
use crate::types::RawKey;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    subscribed: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            subscribed: false,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Restore the terminal.
    ///
    /// Safe to call even if `enter` failed partway through.
    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView for TerminalRenderer {
    type Frame = String;

    fn subscribe(&mut self) -> Result<()> {
        if self.subscribed {
            bail!("terminal key stream is already subscribed");
        }
        self.subscribed = true;
        Ok(())
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    fn next_key(&mut self) -> Result<Option<RawKey>> {
        if !self.subscribed {
            return Ok(None);
        }
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(None);
                    }
                    if let Some(code) = raw_key_code(key) {
                        return Ok(Some(code));
                    }
                    // Keys with no raw code never reach the handler.
                }
                _ => {
                    // Resize, mouse and release events are not part of the
                    // key stream.
                }
            }
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn write(&mut self, frame: &String) -> Result<()> {
        self.stdout.queue(Print(frame))?;
        self.stdout.flush()?;
        Ok(())
    }
}
