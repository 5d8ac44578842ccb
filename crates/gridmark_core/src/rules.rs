//! Win and draw rules.
//!
//! Pure functions over a [`Board`]. Lines are checked in a fixed order so
//! that the reported winner is reproducible even on boards that legal play
//! cannot produce.

use crate::board::Board;
use crate::types::{Mark, Outcome};
use tracing::instrument;

/// Which of the eight lines a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Top-right to bottom-left.
    DiagonalUp,
    /// Horizontal row, counted from the top.
    Row(usize),
    /// Vertical column, counted from the left.
    Column(usize),
}

/// Three cells that win when they carry the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    /// Which line this is.
    pub kind: LineKind,
    /// The cells as `(column, row)`.
    pub cells: [(usize, usize); 3],
}

impl Line {
    /// Returns true if `(column, row)` lies on this line.
    pub fn contains(&self, column: usize, row: usize) -> bool {
        self.cells.contains(&(column, row))
    }
}

/// All winning lines in evaluation order: both diagonals, rows top to
/// bottom, then columns left to right.
pub const LINES: [Line; 8] = [
    Line {
        kind: LineKind::DiagonalDown,
        cells: [(0, 0), (1, 1), (2, 2)],
    },
    Line {
        kind: LineKind::DiagonalUp,
        cells: [(2, 0), (1, 1), (0, 2)],
    },
    Line {
        kind: LineKind::Row(0),
        cells: [(0, 0), (1, 0), (2, 0)],
    },
    Line {
        kind: LineKind::Row(1),
        cells: [(0, 1), (1, 1), (2, 1)],
    },
    Line {
        kind: LineKind::Row(2),
        cells: [(0, 2), (1, 2), (2, 2)],
    },
    Line {
        kind: LineKind::Column(0),
        cells: [(0, 0), (0, 1), (0, 2)],
    },
    Line {
        kind: LineKind::Column(1),
        cells: [(1, 0), (1, 1), (1, 2)],
    },
    Line {
        kind: LineKind::Column(2),
        cells: [(2, 0), (2, 1), (2, 2)],
    },
];

/// Returns the first completed line and the mark on it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Mark)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line
            .cells
            .map(|(column, row)| board.get(column, row).and_then(|cell| cell.mark()));
        match (a, b, c) {
            (Some(first), Some(second), Some(third)) if first == second && second == third => {
                Some((*line, first))
            }
            _ => None,
        }
    })
}

/// Evaluates the board for a completed line.
#[instrument(skip(board))]
pub fn check_outcome(board: &Board) -> Outcome {
    match winning_line(board) {
        Some((_, mark)) => Outcome::won(mark),
        None => Outcome::ONGOING,
    }
}

/// Returns true if the board is full with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
