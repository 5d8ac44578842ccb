//! Translates terminal events into gameplay actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gridmark_core::SIZE;
use ratatui::layout::Rect;
use tracing::instrument;

use crate::geometry::cell_at;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark the given cell for the player to move.
    Mark {
        /// Target column.
        column: usize,
        /// Target row.
        row: usize,
    },
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Mark the cell under the keyboard cursor.
    MarkCursor,
    /// Start a new game.
    Restart,
    /// Leave the screen.
    Quit,
    /// Nothing to do.
    None,
}

/// Maps a terminal event to an action, given where the board is drawn.
#[instrument(skip(event))]
pub fn action_for(event: &Event, board: Rect) -> Action {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Mouse(mouse) => action_for_mouse(mouse, board),
        _ => Action::None,
    }
}

fn action_for_key(key: &KeyEvent) -> Action {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Up => Action::MoveCursor(Direction::Up),
        KeyCode::Down => Action::MoveCursor(Direction::Down),
        KeyCode::Left => Action::MoveCursor(Direction::Left),
        KeyCode::Right => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::MarkCursor,
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => {
                let index = digit as usize - 1;
                Action::Mark {
                    column: index % SIZE,
                    row: index / SIZE,
                }
            }
            _ => Action::None,
        },
        _ => Action::None,
    }
}

fn action_for_mouse(mouse: &MouseEvent, board: Rect) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match cell_at(board, mouse.column, mouse.row) {
            Some((column, row)) => Action::Mark { column, row },
            None => Action::None,
        },
        _ => Action::None,
    }
}

/// Moves the cursor one cell, stopping at the board edge.
pub fn move_cursor(cursor: (usize, usize), direction: Direction) -> (usize, usize) {
    let (column, row) = cursor;
    let last = SIZE - 1;
    match direction {
        Direction::Up => (column, row.saturating_sub(1)),
        Direction::Down => (column, (row + 1).min(last)),
        Direction::Left => (column.saturating_sub(1), row),
        Direction::Right => ((column + 1).min(last), row),
    }
}
