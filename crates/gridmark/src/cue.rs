//! Audible feedback for accepted marks.

use std::fmt::Debug;
use std::io::{self, Stdout, Write};

use tracing::warn;

/// Something that can be played when a mark is accepted.
pub trait Cue: Debug {
    /// Plays the cue. Failures are logged, never returned.
    fn play(&mut self);
}

/// Rings the terminal bell by writing BEL to an output stream.
#[derive(Debug)]
pub struct TerminalBell<W: Write + Debug> {
    out: W,
}

impl TerminalBell<Stdout> {
    /// Creates a bell on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Debug> TerminalBell<W> {
    /// Creates a bell on `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Debug> Cue for TerminalBell<W> {
    fn play(&mut self) {
        if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }
}

/// Cue that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Cue for Silent {
    fn play(&mut self) {}
}
