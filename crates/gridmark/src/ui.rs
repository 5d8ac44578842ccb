//! Stateless rendering for the gameplay screen.

use std::time::Duration;

use gridmark_core::{Cell, Clock, Game, Mark, TurnState};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph},
};

use crate::atlas::GlyphAtlas;
use crate::geometry::{BANNER_HEIGHT, FOOTER_HEIGHT, board_area, cell_rect, center_rect};

const HELP: &str = "Click or 1-9: mark | Arrows + Enter: cursor | R: restart | Q: quit";
const RESTART_PROMPT: &str = "Press 'r' to play again!";

/// Returns the headline for an ended game.
pub fn outcome_text(winner: Option<Mark>) -> &'static str {
    match winner {
        Some(Mark::X) => "PLAYER X WINS!",
        Some(Mark::O) => "PLAYER O WINS!",
        None => "IT'S A DRAW!",
    }
}

/// Returns the banner shown while `mark` is to move.
pub fn turn_text(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "PLAYER X GO",
        Mark::O => "PLAYER O GO",
    }
}

/// Formats play time, floored to whole minutes and seconds.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("Time played: {} minutes, {} seconds.", secs / 60, secs % 60)
}

/// Tint used for a mark's glyph.
pub fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Red,
        Mark::O => Color::Blue,
    }
}

/// Renders the board, then either the turn banner or the game-over overlay.
pub fn draw<C: Clock>(
    frame: &mut Frame,
    game: &Game<C>,
    atlas: &GlyphAtlas,
    cursor: (usize, usize),
) {
    let area = frame.area();
    let board = board_area(area);
    let over = game.is_over();
    let winning_line = game.winning_line();

    for (column, row, cell) in game.board().cells() {
        let on_line = winning_line.is_some_and(|line| line.contains(column, row));
        let border = if on_line {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if !over && (column, row) == cursor {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if over {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        draw_cell(frame, cell_rect(board, column, row), cell, atlas, border, over && !on_line);
    }

    draw_footer(frame, area);

    match game.state() {
        TurnState::Turn(mark) => draw_banner(frame, area, mark),
        TurnState::Ended => draw_game_over(frame, area, game.winner(), game.elapsed()),
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: Cell,
    atlas: &GlyphAtlas,
    border: Style,
    dim: bool,
) {
    let block = Block::bordered().border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(mark) = cell.mark() else {
        return;
    };
    let glyph = atlas.glyph(mark);
    let mut style = Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD);
    if dim {
        style = style.add_modifier(Modifier::DIM);
    }
    let lines: Vec<Line> = glyph.rows().iter().map(|row| Line::from(row.as_str())).collect();
    let target = center_rect(inner, glyph.width() as u16, glyph.height() as u16);
    frame.render_widget(Paragraph::new(lines).style(style), target);
}

fn draw_banner(frame: &mut Frame, area: Rect, mark: Mark) {
    let banner = Rect::new(area.x, area.y, area.width, BANNER_HEIGHT.min(area.height));
    let paragraph = Paragraph::new(turn_text(mark))
        .style(Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, banner);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    if area.height < FOOTER_HEIGHT {
        return;
    }
    let footer = Rect::new(area.x, area.bottom() - FOOTER_HEIGHT, area.width, FOOTER_HEIGHT);
    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, footer);
}

fn draw_game_over(frame: &mut Frame, area: Rect, winner: Option<Mark>, elapsed: Duration) {
    let popup = center_rect(area, 46, 9);
    let headline_style = match winner {
        Some(mark) => Style::default().fg(mark_color(mark)),
        None => Style::default().fg(Color::White),
    }
    .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::default(),
        Line::styled(outcome_text(winner), headline_style),
        Line::default(),
        Line::from(RESTART_PROMPT),
        Line::default(),
        Line::styled(format_elapsed(elapsed), Style::default().fg(Color::Gray)),
    ];

    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title("Game Over")
                .border_style(Style::default().fg(Color::White)),
        );
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_floors() {
        assert_eq!(format_elapsed(Duration::ZERO), "Time played: 0 minutes, 0 seconds.");
        assert_eq!(
            format_elapsed(Duration::from_millis(59_999)),
            "Time played: 0 minutes, 59 seconds."
        );
        assert_eq!(
            format_elapsed(Duration::from_secs(125)),
            "Time played: 2 minutes, 5 seconds."
        );
    }

    #[test]
    fn test_outcome_text() {
        assert_eq!(outcome_text(Some(Mark::X)), "PLAYER X WINS!");
        assert_eq!(outcome_text(Some(Mark::O)), "PLAYER O WINS!");
        assert_eq!(outcome_text(None), "IT'S A DRAW!");
    }

    #[test]
    fn test_turn_text() {
        assert_eq!(turn_text(Mark::X), "PLAYER X GO");
        assert_eq!(turn_text(Mark::O), "PLAYER O GO");
    }
}
