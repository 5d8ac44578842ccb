//! Board placement on the terminal and pointer-to-cell mapping.

use gridmark_core::{Board, SIZE};
use ratatui::layout::Rect;
use tracing::instrument;

/// Board width in terminal columns.
pub const BOARD_WIDTH: u16 = 39;

/// Board height in terminal rows.
pub const BOARD_HEIGHT: u16 = 21;

/// Width of one cell, outline included.
pub const CELL_WIDTH: u16 = BOARD_WIDTH / SIZE as u16;

/// Height of one cell, outline included.
pub const CELL_HEIGHT: u16 = BOARD_HEIGHT / SIZE as u16;

/// Rows reserved above the board for the turn banner.
pub const BANNER_HEIGHT: u16 = 3;

/// Rows reserved below the board for key hints.
pub const FOOTER_HEIGHT: u16 = 1;

/// Returns where the board is drawn inside a frame of size `area`.
///
/// The board is centered in the space between banner and footer and
/// clipped to the frame when the terminal is too small.
#[instrument]
pub fn board_area(area: Rect) -> Rect {
    let top = area.y.saturating_add(BANNER_HEIGHT);
    let body_height = area.height.saturating_sub(BANNER_HEIGHT + FOOTER_HEIGHT);
    let body = Rect::new(area.x, top, area.width, body_height);
    center_rect(body, BOARD_WIDTH, BOARD_HEIGHT)
}

/// Returns the rectangle of cell `(column, row)` for a board drawn at `board`.
pub fn cell_rect(board: Rect, column: usize, row: usize) -> Rect {
    let x = board.x.saturating_add(column as u16 * CELL_WIDTH);
    let y = board.y.saturating_add(row as u16 * CELL_HEIGHT);
    Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board)
}

/// Maps terminal coordinates to the `(column, row)` of a cell.
///
/// Divides the offset from the board origin by the fixed cell size.
/// Returns `None` for points above, left of or past the board.
#[instrument]
pub fn cell_at(board: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    let dx = x.checked_sub(board.x)?;
    let dy = y.checked_sub(board.y)?;
    let column = usize::from(dx / CELL_WIDTH);
    let row = usize::from(dy / CELL_HEIGHT);
    Board::in_bounds(column, row).then_some((column, row))
}

/// Centers a `width` x `height` rectangle in `area`, clipped to `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
