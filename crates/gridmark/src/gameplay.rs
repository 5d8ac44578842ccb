//! The gameplay screen: one game, its glyph atlas and the move cue.

use crossterm::event::Event;
use gridmark_core::{Clock, Game, SystemClock};
use ratatui::{Frame, layout::Rect};
use tracing::{debug, info, instrument};

use crate::atlas::{AtlasError, GlyphAtlas};
use crate::config::Settings;
use crate::cue::{Cue, Silent, TerminalBell};
use crate::geometry::board_area;
use crate::input::{Action, action_for, move_cursor};
use crate::screen::{Screen, ScreenTransition};
use crate::ui;

/// Screen owning the live game.
///
/// Created by [`GameplayScreen::enter`], which acquires the glyph atlas and
/// starts a game; [`GameplayScreen::unload`] releases the atlas.
#[derive(Debug)]
pub struct GameplayScreen<C: Clock = SystemClock> {
    game: Game<C>,
    atlas: GlyphAtlas,
    cursor: (usize, usize),
    cue: Box<dyn Cue>,
}

impl GameplayScreen<SystemClock> {
    /// Enters the screen: loads the atlas named by `settings` and starts a game.
    #[instrument(skip(settings), fields(atlas = ?settings.atlas(), sound = settings.sound()))]
    pub fn enter(settings: &Settings) -> Result<Self, AtlasError> {
        let atlas = match settings.atlas() {
            Some(path) => GlyphAtlas::load(path)?,
            None => GlyphAtlas::builtin(),
        };
        let cue: Box<dyn Cue> = if *settings.sound() {
            Box::new(TerminalBell::stdout())
        } else {
            Box::new(Silent)
        };
        info!("Entering gameplay screen");
        Ok(Self::with_parts(Game::new(), atlas, cue))
    }
}

impl<C: Clock> GameplayScreen<C> {
    /// Builds a screen from an existing game, atlas and cue.
    pub fn with_parts(game: Game<C>, atlas: GlyphAtlas, cue: Box<dyn Cue>) -> Self {
        Self {
            game,
            atlas,
            cursor: (1, 1),
            cue,
        }
    }

    /// Returns the live game.
    pub fn game(&self) -> &Game<C> {
        &self.game
    }

    /// Returns the loaded glyph atlas.
    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    /// Returns the keyboard cursor as `(column, row)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Applies one action.
    #[instrument(skip(self), fields(state = ?self.game.state()))]
    pub fn apply(&mut self, action: Action) -> ScreenTransition {
        match action {
            Action::Mark { column, row } => self.mark(column, row),
            Action::MarkCursor => {
                let (column, row) = self.cursor;
                self.mark(column, row);
            }
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Restart => {
                if self.game.is_over() {
                    info!("Restarting game");
                    self.game.initialize();
                }
            }
            Action::Quit => return ScreenTransition::Quit,
            Action::None => {}
        }
        ScreenTransition::Stay
    }

    fn mark(&mut self, column: usize, row: usize) {
        let Some(player) = self.game.current_turn() else {
            debug!("Ignoring mark on ended game");
            return;
        };
        if self.game.mark(column, row, player) {
            self.cursor = (column, row);
            self.cue.play();
        }
    }

    /// Leaves the screen, releasing the atlas.
    #[instrument(skip(self))]
    pub fn unload(self) {
        info!(occupied = self.game.occupied(), "Unloading gameplay screen");
        self.atlas.release();
    }
}

impl<C: Clock> Screen for GameplayScreen<C> {
    fn render(&self, frame: &mut Frame) {
        ui::draw(frame, &self.game, &self.atlas, self.cursor);
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> ScreenTransition {
        let action = action_for(event, board_area(area));
        self.apply(action)
    }
}
