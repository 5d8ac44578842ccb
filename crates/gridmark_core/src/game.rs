//! The game state machine.
//!
//! A [`Game`] owns the board, whose turn it is, the winner and the session
//! timestamps. It changes only through [`Game::initialize`] and
//! [`Game::mark`] (or its detailed form [`Game::try_mark`]).
//!
//! ```text
//! Turn(X) --mark--> Turn(O) --mark--> Turn(X) ...
//!    \                 \
//!     +--win / 9th cell-+--> Ended --initialize--> Turn(X)
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::clock::{Clock, SystemClock};
use crate::error::MarkError;
use crate::rules::{self, Line};
use crate::types::{Cell, Mark, MarkOutcome, Outcome, TurnState};

/// A single tic-tac-toe session.
#[derive(Debug, Clone)]
pub struct Game<C = SystemClock> {
    board: Board,
    state: TurnState,
    winner: Option<Mark>,
    started_at: Instant,
    ended_at: Option<Instant>,
    clock: C,
}

impl Game<SystemClock> {
    /// Creates an initialized game timed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Game<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Game<C> {
    /// Creates an initialized game timed by `clock`.
    pub fn with_clock(clock: C) -> Self {
        let started_at = clock.now();
        Self {
            board: Board::new(),
            state: TurnState::Turn(Mark::X),
            winner: None,
            started_at,
            ended_at: None,
            clock,
        }
    }

    /// Resets the game: empty board, X to move, no winner, fresh start time.
    ///
    /// Valid at any point, including mid-game.
    #[instrument(skip(self), fields(occupied = self.board.occupied()))]
    pub fn initialize(&mut self) {
        self.board = Board::new();
        self.state = TurnState::Turn(Mark::X);
        self.winner = None;
        self.started_at = self.clock.now();
        self.ended_at = None;
        info!("Game initialized");
    }

    /// Marks `(column, row)` for `player`.
    ///
    /// Returns false, without changing anything, if the indices are out of
    /// bounds, the cell is occupied, or the game has ended. The player is
    /// not checked against [`Game::current_turn`].
    pub fn mark(&mut self, column: usize, row: usize, player: Mark) -> bool {
        match self.try_mark(column, row, player) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Mark rejected");
                false
            }
        }
    }

    /// Marks `(column, row)` for `player`, reporting what happened.
    ///
    /// A completed line is checked before the full board, so a win on the
    /// ninth mark is a win rather than a draw.
    ///
    /// # Errors
    ///
    /// Returns [`MarkError`] when the mark is rejected; the game is unchanged.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn try_mark(
        &mut self,
        column: usize,
        row: usize,
        player: Mark,
    ) -> Result<MarkOutcome, MarkError> {
        if self.state == TurnState::Ended {
            return Err(MarkError::GameOver);
        }
        if !Board::in_bounds(column, row) {
            return Err(MarkError::OutOfBounds { column, row });
        }
        if !self.board.place(column, row, player) {
            return Err(MarkError::Occupied { column, row });
        }
        debug!(occupied = self.board.occupied(), "Cell marked");

        let outcome = self.check_outcome();
        let result = if let Some(winner) = outcome.winner {
            self.finish(Some(winner));
            MarkOutcome::Won(winner)
        } else if self.board.is_full() {
            self.finish(None);
            MarkOutcome::Draw
        } else {
            let next = player.opponent();
            self.state = TurnState::Turn(next);
            MarkOutcome::Continue { next }
        };
        Ok(result)
    }

    fn finish(&mut self, winner: Option<Mark>) {
        self.state = TurnState::Ended;
        self.winner = winner;
        self.ended_at = Some(self.clock.now());
        info!(?winner, occupied = self.board.occupied(), "Game ended");
    }

    /// Checks the board for a completed line.
    ///
    /// Does not report draws; see [`Game::winner`] after the game ends.
    pub fn check_outcome(&self) -> Outcome {
        rules::check_outcome(&self.board)
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(&self.board).map(|(line, _)| line)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `(column, row)`, or `None` if out of bounds.
    pub fn cell(&self, column: usize, row: usize) -> Option<Cell> {
        self.board.get(column, row)
    }

    /// Returns the turn state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the mark to move, or `None` once ended.
    pub fn current_turn(&self) -> Option<Mark> {
        self.state.to_move()
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.state == TurnState::Ended
    }

    /// Winner of an ended game; `None` is a draw (or a game still running).
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        self.board.occupied()
    }

    /// Time from initialization to the end of the game, or to now while it runs.
    pub fn elapsed(&self) -> Duration {
        let until = self.ended_at.unwrap_or_else(|| self.clock.now());
        until.saturating_duration_since(self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn test_new_game_x_to_move() {
        let game = Game::new();
        assert_eq!(game.state(), TurnState::Turn(Mark::X));
        assert_eq!(game.occupied(), 0);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_try_mark_reports_errors() {
        let mut game = Game::new();
        assert_eq!(
            game.try_mark(3, 0, Mark::X),
            Err(MarkError::OutOfBounds { column: 3, row: 0 })
        );
        assert_eq!(game.try_mark(1, 1, Mark::X), Ok(MarkOutcome::Continue { next: Mark::O }));
        assert_eq!(
            game.try_mark(1, 1, Mark::O),
            Err(MarkError::Occupied { column: 1, row: 1 })
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let mut game = Game::new();
        for (column, row, mark) in [
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
            (2, 0, Mark::X),
        ] {
            game.try_mark(column, row, mark).unwrap();
        }
        assert!(game.is_over());
        assert_eq!(game.try_mark(9, 9, Mark::O), Err(MarkError::GameOver));
    }

    #[test]
    fn test_elapsed_freezes_at_end() {
        let clock = ManualClock::new();
        let mut game = Game::with_clock(clock.clone());

        clock.advance(Duration::from_secs(30));
        assert_eq!(game.elapsed(), Duration::from_secs(30));

        for (column, row, mark) in [
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (1, 0, Mark::X),
            (1, 1, Mark::O),
        ] {
            game.mark(column, row, mark);
        }
        clock.advance(Duration::from_secs(45));
        assert!(game.mark(2, 0, Mark::X));

        clock.advance(Duration::from_secs(600));
        assert_eq!(game.elapsed(), Duration::from_secs(75));
    }

    #[test]
    fn test_initialize_restarts_timer() {
        let clock = ManualClock::new();
        let mut game = Game::with_clock(clock.clone());
        clock.advance(Duration::from_secs(90));
        game.initialize();
        assert_eq!(game.elapsed(), Duration::ZERO);
    }
}
