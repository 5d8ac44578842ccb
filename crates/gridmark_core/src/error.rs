//! Errors from marking a cell.

/// Why a mark attempt was rejected.
///
/// Rejections never change the game. Callers that only need a yes/no
/// answer use [`Game::mark`](crate::Game::mark) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MarkError {
    /// The indices do not address a cell.
    #[display("Cell ({column}, {row}) is out of bounds")]
    OutOfBounds {
        /// Requested column.
        column: usize,
        /// Requested row.
        row: usize,
    },

    /// The cell already carries a mark.
    #[display("Cell ({column}, {row}) is already occupied")]
    Occupied {
        /// Requested column.
        column: usize,
        /// Requested row.
        row: usize,
    },

    /// The game has ended and awaits a restart.
    #[display("Game is already over")]
    GameOver,
}
