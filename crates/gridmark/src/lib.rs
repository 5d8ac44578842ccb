//! Gridmark - single-screen tic-tac-toe in the terminal.
//!
//! The game rules live in [`gridmark_core`]; this crate supplies the
//! screen around them.
//!
//! # Architecture
//!
//! - **Gameplay screen**: owns the [`Game`], the glyph atlas and the move cue
//! - **Input**: mouse clicks, digits and cursor keys mapped to actions
//! - **UI**: ratatui rendering of the board, banner and game-over overlay
//! - **Config**: TOML settings overridden by CLI flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod atlas;
mod cli;
mod config;
mod cue;
mod gameplay;
pub mod geometry;
mod input;
mod screen;
mod tui;
mod ui;

pub use atlas::{AtlasError, Glyph, GlyphAtlas, MAX_GLYPH_HEIGHT, MAX_GLYPH_WIDTH};
pub use cli::Cli;
pub use config::{ConfigError, Settings};
pub use cue::{Cue, Silent, TerminalBell};
pub use gameplay::GameplayScreen;
pub use gridmark_core::{Game, Mark, TurnState};
pub use input::{Action, Direction, action_for, move_cursor};
pub use screen::{Screen, ScreenTransition};
pub use tui::{EventSource, TerminalEvents, init_tracing, run, run_screen};
pub use ui::{format_elapsed, outcome_text, turn_text};
