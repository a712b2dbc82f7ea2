//! Input smoke-test binary.
//!
//! Wires the shell to the real terminal with a stub engine that accepts
//! every move and counts turns instead of playing a game. Useful for
//! checking key mappings end to end: arrows and `hjkl` register moves,
//! `n` resets the counter, `q` quits.
//!
//! Set `RUST_LOG=debug` to trace key events on stderr.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tui_game_shell::{Direction, GameController, InputRenderLoop, TerminalRenderer};

/// Stub engine: no rules, every move is accepted.
struct StepCounter {
    steps: u32,
    last: Option<Direction>,
}

impl StepCounter {
    fn new() -> Self {
        Self {
            steps: 0,
            last: None,
        }
    }
}

impl GameController for StepCounter {
    type Frame = String;

    fn start_new_game(&mut self) {
        self.steps = 0;
        self.last = None;
    }

    fn action(&mut self, direction: Direction) {
        self.last = Some(direction);
    }

    fn advance_turn(&mut self) -> bool {
        self.steps += 1;
        true
    }

    fn render(&self) -> String {
        let last = self.last.map(|d| d.as_str()).unwrap_or("-");
        format!(
            "=========== input-demo ===========\r\n\
             \r\n\
             arrows / h j k l : move\r\n\
             n : new game\r\n\
             q : quit\r\n\
             \r\n\
             last action: {}\r\n\
             steps: {}\r\n",
            last, self.steps
        )
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(io::stderr)
        .init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut engine = StepCounter::new();
    let result = InputRenderLoop::new(&mut engine, &mut term).and_then(|mut app| app.run());

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}
