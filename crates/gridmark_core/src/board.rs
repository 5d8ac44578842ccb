//! 3x3 board storage indexed by `(column, row)`.

use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of columns and rows on the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// The 3x3 grid of cells plus a count of occupied cells.
///
/// Cells are addressed as `(column, row)`, with `(0, 0)` at the top-left.
/// The occupied count always equals the number of non-empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    occupied: usize,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `(column, row)` addresses a cell on the board.
    pub fn in_bounds(column: usize, row: usize) -> bool {
        column < SIZE && row < SIZE
    }

    /// Returns the cell at `(column, row)`, or `None` if out of bounds.
    pub fn get(&self, column: usize, row: usize) -> Option<Cell> {
        self.cells.get(column).and_then(|col| col.get(row)).copied()
    }

    /// Returns true if `(column, row)` is on the board and empty.
    pub fn is_empty(&self, column: usize, row: usize) -> bool {
        matches!(self.get(column, row), Some(Cell::Empty))
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns true once every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.occupied == CELLS
    }

    /// Iterates over every cell as `(column, row, cell)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..SIZE).flat_map(move |row| {
            (0..SIZE).map(move |column| (column, row, self.cells[column][row]))
        })
    }

    /// Writes `mark` into an empty in-bounds cell.
    ///
    /// Returns false and leaves the board untouched otherwise.
    #[instrument(skip(self))]
    pub(crate) fn place(&mut self, column: usize, row: usize, mark: Mark) -> bool {
        if !self.is_empty(column, row) {
            return false;
        }
        self.cells[column][row] = Cell::Marked(mark);
        self.occupied += 1;
        true
    }

    /// Formats the board as text, `.` for empty cells.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..SIZE {
            for column in 0..SIZE {
                let symbol = match self.cells[column][row] {
                    Cell::Empty => '.',
                    Cell::Marked(Mark::X) => 'X',
                    Cell::Marked(Mark::O) => 'O',
                };
                result.push(symbol);
            }
            if row + 1 < SIZE {
                result.push('\n');
            }
        }
        result
    }
}
