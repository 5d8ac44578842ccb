//! Glyph atlas: the text-art images drawn for each mark.
//!
//! The atlas is the screen's one external asset. It is loaded when the
//! gameplay screen is entered and released when the screen is unloaded.
//!
//! On disk it is a TOML file with one table per mark:
//!
//! ```toml
//! [x]
//! rows = ["\\   /", " \\ / ", "  X  ", " / \\ ", "/   \\"]
//!
//! [o]
//! rows = [" .-. ", "/   \\", "\\   /", " '-' "]
//! ```

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridmark_core::Mark;
use serde::Deserialize;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};
use unicode_width::UnicodeWidthStr;

use crate::geometry::{CELL_HEIGHT, CELL_WIDTH};

/// Widest glyph that fits inside a cell outline.
pub const MAX_GLYPH_WIDTH: usize = CELL_WIDTH as usize - 2;

/// Tallest glyph that fits inside a cell outline.
pub const MAX_GLYPH_HEIGHT: usize = CELL_HEIGHT as usize - 2;

/// Text art for one mark.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct Glyph {
    /// Rows of the image, top to bottom, all the same display width.
    rows: Vec<String>,
}

impl Glyph {
    /// Creates a glyph from its rows.
    pub fn new<S: Into<String>>(rows: impl IntoIterator<Item = S>) -> Self {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.width())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Deserialize)]
struct AtlasFile {
    x: Glyph,
    o: Glyph,
}

/// Glyphs for both marks, validated to fit a cell.
#[derive(Debug, Clone, Getters)]
pub struct GlyphAtlas {
    /// Glyph for X.
    x: Glyph,
    /// Glyph for O.
    o: Glyph,
    /// File the atlas was read from; `None` for the built-in art.
    source: Option<PathBuf>,
}

impl GlyphAtlas {
    /// Returns the built-in art.
    pub fn builtin() -> Self {
        Self {
            x: Glyph::new(["\\     /", " \\   / ", "   X   ", " /   \\ ", "/     \\"]),
            o: Glyph::new([" .---. ", "/     \\", "|     |", "\\     /", " '---' "]),
            source: None,
        }
    }

    /// Reads and validates an atlas file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        debug!("Loading glyph atlas");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AtlasError::new(format!("Failed to read atlas: {}", e)))?;
        let mut atlas = Self::parse(&content)?;
        atlas.source = Some(path.as_ref().to_path_buf());
        info!(
            x = ?(atlas.x.width(), atlas.x.height()),
            o = ?(atlas.o.width(), atlas.o.height()),
            "Glyph atlas loaded"
        );
        Ok(atlas)
    }

    /// Parses and validates atlas TOML.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, AtlasError> {
        let file: AtlasFile = toml::from_str(content)
            .map_err(|e| AtlasError::new(format!("Failed to parse atlas: {}", e)))?;
        let atlas = Self {
            x: file.x,
            o: file.o,
            source: None,
        };
        atlas.validate()?;
        Ok(atlas)
    }

    /// Returns the glyph for `mark`.
    pub fn glyph(&self, mark: Mark) -> &Glyph {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    fn validate(&self) -> Result<(), AtlasError> {
        for mark in Mark::iter() {
            let glyph = self.glyph(mark);
            if glyph.rows.is_empty() {
                return Err(AtlasError::new(format!("Glyph {} has no rows", mark)));
            }
            let width = glyph.width();
            if let Some(row) = glyph.rows.iter().position(|r| r.width() != width) {
                return Err(AtlasError::new(format!(
                    "Glyph {} row {} is {} columns wide, expected {}",
                    mark,
                    row,
                    glyph.rows[row].width(),
                    width
                )));
            }
            if width > MAX_GLYPH_WIDTH || glyph.height() > MAX_GLYPH_HEIGHT {
                return Err(AtlasError::new(format!(
                    "Glyph {} is {}x{}, larger than {}x{}",
                    mark,
                    width,
                    glyph.height(),
                    MAX_GLYPH_WIDTH,
                    MAX_GLYPH_HEIGHT
                )));
            }
        }
        Ok(())
    }

    /// Releases the atlas.
    #[instrument(skip(self))]
    pub fn release(self) {
        info!(source = ?self.source, "Glyph atlas released");
    }
}

/// Atlas loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Atlas error: {} at {}:{}", message, file, line)]
pub struct AtlasError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AtlasError {
    /// Creates a new atlas error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
