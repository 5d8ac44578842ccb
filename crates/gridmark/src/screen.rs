//! Screen trait and transition type.

use crossterm::event::Event;
use ratatui::{Frame, layout::Rect};

/// The result of handling an event on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Leave the screen and exit.
    Quit,
}

/// A screen drawn and driven by the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles one terminal event. `area` is the current terminal size.
    fn handle_event(&mut self, event: &Event, area: Rect) -> ScreenTransition;
}
