//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{Board, Player, Position, Square};

use super::HitMap;
use crate::tui::input::Action;

const BOARD_WIDTH: u16 = 38;
const BOARD_HEIGHT: u16 = 11;

/// Renders the board as a 3x3 grid of clickable cells.
///
/// Cells in `winning` are highlighted; `cursor` marks the keyboard cursor
/// when the board has focus. Each cell is registered in `hits` so a click on
/// it emits [`Action::ClickCell`] with its own index.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    winning: &[Position],
    cursor: Option<Position>,
    hits: &mut HitMap,
) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let view = BoardView {
        board,
        winning,
        cursor,
    };
    view.render_row(f, rows[0], 0, hits);
    render_separator(f, rows[1]);
    view.render_row(f, rows[2], 3, hits);
    render_separator(f, rows[3]);
    view.render_row(f, rows[4], 6, hits);
}

/// What a cell needs to know to draw itself.
struct BoardView<'a> {
    board: &'a Board,
    winning: &'a [Position],
    cursor: Option<Position>,
}

impl BoardView<'_> {
    fn render_row(&self, f: &mut Frame, area: Rect, start: usize, hits: &mut HitMap) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(area);

        for (offset, col) in [0, 2, 4].into_iter().enumerate() {
            let Some(pos) = Position::from_index(start + offset) else {
                continue;
            };
            self.render_cell(f, cols[col], pos);
            hits.push(cols[col], Action::ClickCell(pos.to_index()));
        }
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }

    fn render_cell(&self, f: &mut Frame, area: Rect, pos: Position) {
        let (symbol, mut style) = match self.board.get(pos) {
            Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
            Square::Occupied(Player::X) => {
                ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD))
            }
            Square::Occupied(Player::O) => {
                ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            }
        };

        if self.winning.contains(&pos) {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if self.cursor == Some(pos) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(symbol),
            Line::from(""),
        ])
        .style(style)
        .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
