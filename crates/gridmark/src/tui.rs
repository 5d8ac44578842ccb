//! Terminal setup, teardown and the event loop.

use std::io::{self, Write};
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridmark_core::Clock;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::gameplay::GameplayScreen;
use crate::screen::{Screen, ScreenTransition};

/// Sends log output to the configured file so it does not corrupt the screen.
///
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Where the event loop gets its input from.
pub trait EventSource {
    /// Waits for the next event; `None` if nothing arrived in time.
    fn next_event(&mut self) -> io::Result<Option<Event>>;
}

/// Reads events from the real terminal, waiting up to `poll` for each.
#[derive(Debug, Clone, Copy)]
pub struct TerminalEvents {
    poll: Duration,
}

impl TerminalEvents {
    /// Creates a source that polls for at most `poll` per call.
    pub fn new(poll: Duration) -> Self {
        Self { poll }
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        if event::poll(self.poll)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Raw mode, alternate screen and mouse capture, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // Dropping the guard from here on undoes raw mode.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(&mut io::stdout());
    }
}

/// Puts the terminal back into its normal state.
///
/// Every step is attempted even if an earlier one fails.
fn restore<W: Write>(out: &mut W) {
    debug!("Restoring terminal");
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
    if let Err(err) = execute!(out, DisableMouseCapture) {
        warn!(error = %err, "Failed to disable mouse capture");
    }
    if let Err(err) = execute!(out, Show) {
        warn!(error = %err, "Failed to show cursor");
    }
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore(&mut io::stdout());
        previous(info);
    }));
}

/// Runs the gameplay screen until the player quits.
///
/// The terminal is restored on every exit path, including errors and panics.
#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting gridmark");

    let screen = GameplayScreen::enter(settings).context("Failed to enter gameplay screen")?;

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut events = TerminalEvents::new(Duration::from_millis(*settings.poll_interval_ms()));
    let res = run_screen(&mut terminal, screen, &mut events);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, waits for one event and hands it to the screen until it quits.
///
/// The screen is unloaded whether the loop ends by quitting or by error.
pub fn run_screen<B, C, E>(
    terminal: &mut Terminal<B>,
    mut screen: GameplayScreen<C>,
    events: &mut E,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    C: Clock,
    E: EventSource,
{
    let res = drive(terminal, &mut screen, events);
    screen.unload();
    res
}

fn drive<B, C, E>(
    terminal: &mut Terminal<B>,
    screen: &mut GameplayScreen<C>,
    events: &mut E,
) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    C: Clock,
    E: EventSource,
{
    loop {
        terminal.draw(|f| screen.render(f))?;

        let Some(event) = events.next_event().context("Failed to read terminal event")? else {
            continue;
        };
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        if screen.handle_event(&event, area) == ScreenTransition::Quit {
            info!("Player quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that rejects everything.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("broken pipe"))
        }
    }

    #[test]
    fn test_restore_emits_every_step() {
        let mut out = Vec::new();
        restore(&mut out);
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("\x1b[?1049l"), "alternate screen not left: {:?}", text);
        assert!(text.contains("\x1b[?1000l"), "mouse capture not disabled: {:?}", text);
        assert!(text.contains("\x1b[?25h"), "cursor not shown: {:?}", text);
    }

    #[test]
    fn test_restore_survives_failing_writer() {
        // Each step fails; none of them may stop the rest or panic.
        restore(&mut Broken);
    }
}
