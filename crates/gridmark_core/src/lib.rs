//! Pure tic-tac-toe state machine.
//!
//! Owns a 3x3 board, the turn/outcome state and the session timestamps.
//! Nothing here performs I/O; rendering, input and sound belong to the
//! caller, which reacts to the boolean returned by [`Game::mark`].
//!
//! # Example
//!
//! ```
//! use gridmark_core::{Game, Mark, TurnState};
//!
//! let mut game = Game::new();
//! assert!(game.mark(0, 0, Mark::X));
//! assert!(!game.mark(0, 0, Mark::O));
//! assert_eq!(game.state(), TurnState::Turn(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod clock;
mod error;
mod game;
pub mod rules;
mod types;

pub use board::{Board, CELLS, SIZE};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::MarkError;
pub use game::Game;
pub use rules::{Line, LineKind};
pub use types::{Cell, Mark, MarkOutcome, Outcome, TurnState};
