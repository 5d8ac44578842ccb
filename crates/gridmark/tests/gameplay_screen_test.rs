//! Tests for the gameplay screen: input handling, cue and rendering.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gridmark::geometry::{board_area, cell_rect};
use gridmark::{Cue, GameplayScreen, GlyphAtlas, Mark, Screen, ScreenTransition, TurnState};
use gridmark_core::{Game, ManualClock};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 30,
};

/// Cue that counts how often it was played.
#[derive(Debug, Clone, Default)]
struct CountingCue {
    plays: Rc<Cell<usize>>,
}

impl Cue for CountingCue {
    fn play(&mut self) {
        self.plays.set(self.plays.get() + 1);
    }
}

fn screen() -> (GameplayScreen<ManualClock>, ManualClock, Rc<Cell<usize>>) {
    let clock = ManualClock::new();
    let cue = CountingCue::default();
    let plays = cue.plays.clone();
    let screen = GameplayScreen::with_parts(
        Game::with_clock(clock.clone()),
        GlyphAtlas::builtin(),
        Box::new(cue),
    );
    (screen, clock, plays)
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn click(column: usize, row: usize) -> Event {
    let cell = cell_rect(board_area(AREA), column, row);
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: cell.x + 2,
        row: cell.y + 1,
        modifiers: KeyModifiers::NONE,
    })
}

fn send(screen: &mut GameplayScreen<ManualClock>, events: &[Event]) {
    for event in events {
        assert_eq!(screen.handle_event(event, AREA), ScreenTransition::Stay);
    }
}

fn rendered(screen: &GameplayScreen<ManualClock>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|f| screen.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_click_marks_cell_and_plays_cue() {
    let (mut screen, _clock, plays) = screen();
    send(&mut screen, &[click(2, 1)]);

    assert_eq!(screen.game().cell(2, 1), Some(gridmark_core::Cell::Marked(Mark::X)));
    assert_eq!(screen.game().state(), TurnState::Turn(Mark::O));
    assert_eq!(plays.get(), 1);
}

#[test]
fn test_occupied_cell_is_silent() {
    let (mut screen, _clock, plays) = screen();
    send(&mut screen, &[click(0, 0), click(0, 0), key('1')]);

    assert_eq!(screen.game().occupied(), 1);
    assert_eq!(plays.get(), 1);
}

#[test]
fn test_click_outside_board_ignored() {
    let (mut screen, _clock, plays) = screen();
    let event = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    send(&mut screen, &[event]);

    assert_eq!(screen.game().occupied(), 0);
    assert_eq!(plays.get(), 0);
}

#[test]
fn test_column_win_shows_overlay() {
    let (mut screen, clock, plays) = screen();
    // X: 1, 4, 7 (left column); O: 2, 5.
    send(&mut screen, &[key('1'), key('2'), key('4'), key('5')]);
    clock.advance(Duration::from_secs(65));
    send(&mut screen, &[key('7')]);
    clock.advance(Duration::from_secs(300));

    assert_eq!(screen.game().state(), TurnState::Ended);
    assert_eq!(screen.game().winner(), Some(Mark::X));
    assert_eq!(plays.get(), 5);

    let text = rendered(&screen);
    assert!(text.contains("PLAYER X WINS!"), "{}", text);
    assert!(text.contains("Press 'r' to play again!"));
    assert!(text.contains("Time played: 1 minutes, 5 seconds."));
    assert!(!text.contains("PLAYER O GO"));
}

#[test]
fn test_marks_after_end_ignored() {
    let (mut screen, _clock, plays) = screen();
    send(&mut screen, &[key('1'), key('2'), key('4'), key('5'), key('7')]);
    send(&mut screen, &[key('9'), click(2, 2)]);

    assert_eq!(screen.game().occupied(), 5);
    assert_eq!(plays.get(), 5);
}

#[test]
fn test_draw_shows_overlay() {
    let (mut screen, _clock, _plays) = screen();
    // X O X / X O O / O X X
    send(
        &mut screen,
        &[
            key('1'),
            key('2'),
            key('3'),
            key('5'),
            key('4'),
            key('6'),
            key('8'),
            key('7'),
            key('9'),
        ],
    );

    assert_eq!(screen.game().state(), TurnState::Ended);
    assert_eq!(screen.game().winner(), None);
    assert!(rendered(&screen).contains("IT'S A DRAW!"));
}

#[test]
fn test_restart_only_after_end() {
    let (mut screen, _clock, _plays) = screen();
    send(&mut screen, &[key('1'), key('r')]);
    assert_eq!(screen.game().occupied(), 1);

    send(&mut screen, &[key('2'), key('4'), key('5'), key('7')]);
    assert!(screen.game().is_over());

    send(&mut screen, &[key('r')]);
    assert_eq!(screen.game().occupied(), 0);
    assert_eq!(screen.game().state(), TurnState::Turn(Mark::X));
}

#[test]
fn test_cursor_marks_with_enter() {
    let (mut screen, _clock, plays) = screen();
    assert_eq!(screen.cursor(), (1, 1));

    let up = Event::Key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    let left = Event::Key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
    let enter = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    send(&mut screen, &[up, left, enter]);

    assert_eq!(screen.cursor(), (0, 0));
    assert_eq!(screen.game().cell(0, 0), Some(gridmark_core::Cell::Marked(Mark::X)));
    assert_eq!(plays.get(), 1);
}

#[test]
fn test_turn_banner() {
    let (mut screen, _clock, _plays) = screen();
    assert!(rendered(&screen).contains("PLAYER X GO"));

    send(&mut screen, &[key('5')]);
    assert!(rendered(&screen).contains("PLAYER O GO"));
}

#[test]
fn test_quit() {
    let (mut screen, _clock, _plays) = screen();
    assert_eq!(screen.handle_event(&key('q'), AREA), ScreenTransition::Quit);
    screen.unload();
}
