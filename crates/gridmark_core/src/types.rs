//! Core domain types for the game state machine.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// The value held by one cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has marked this cell.
    #[default]
    Empty,
    /// Cell carries a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if the cell has not been marked.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// Whose move is next, or that the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    /// The given mark plays next.
    Turn(Mark),
    /// A line was completed or the board filled up.
    Ended,
}

impl TurnState {
    /// Returns the mark to move, or `None` once the game has ended.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            TurnState::Turn(mark) => Some(mark),
            TurnState::Ended => None,
        }
    }
}

/// Result of querying the board for a completed line.
///
/// `winner` is only `Some` when `is_over` is true. A full board with no
/// line is *not* reported here; draws are decided by the occupied count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// True if some line holds three equal marks.
    pub is_over: bool,
    /// Mark that completed the line.
    pub winner: Option<Mark>,
}

impl Outcome {
    /// Outcome for a board without any completed line.
    pub const ONGOING: Outcome = Outcome {
        is_over: false,
        winner: None,
    };

    /// Outcome for a board where `mark` completed a line.
    pub fn won(mark: Mark) -> Self {
        Self {
            is_over: true,
            winner: Some(mark),
        }
    }
}

/// What a successful mark did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// No terminal condition; `next` moves now.
    Continue {
        /// Mark to move next.
        next: Mark,
    },
    /// The mark completed a line.
    Won(Mark),
    /// The mark filled the ninth cell without completing a line.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_cell_mark() {
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Cell::Marked(Mark::O).mark(), Some(Mark::O));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_turn_state_to_move() {
        assert_eq!(TurnState::Turn(Mark::X).to_move(), Some(Mark::X));
        assert_eq!(TurnState::Ended.to_move(), None);
    }
}
