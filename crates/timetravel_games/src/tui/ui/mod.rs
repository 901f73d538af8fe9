//! UI rendering using ratatui.
//!
//! Rendering is stateless: [`draw`] reads the [`App`] and returns a
//! [`HitMap`] recording which screen area emits which [`Action`] when
//! clicked.

mod board;
mod moves;

use super::app::App;
use super::input::{Action, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{GameStatus, status_line};

pub use board::render_board;
pub use moves::render_move_list;

/// Clickable screen regions from the last draw.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Action)>,
}

impl HitMap {
    /// Registers `area` as emitting `action` when clicked.
    pub fn push(&mut self, area: Rect, action: Action) {
        self.regions.push((area, action));
    }

    /// Returns the action under the terminal cell at (`column`, `row`).
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        self.regions
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .map(|(_, action)| *action)
    }

    /// Registered regions in draw order.
    pub fn regions(&self) -> &[(Rect, Action)] {
        &self.regions
    }
}

const HELP: &str =
    "1-9/click: move | arrows+Enter: cursor | [ ]: step | Tab: history | o: order | n: new | q: quit";

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) -> HitMap {
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Time Travel Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let game = app.game();
    let status = game.status();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    render_board(
        f,
        body[0],
        game.current_board(),
        status.winning_positions(),
        cursor,
        &mut hits,
    );

    draw_info(f, body[1], app, &status, &mut hits);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);

    hits
}

fn draw_info(f: &mut Frame, area: Rect, app: &App, status: &GameStatus, hits: &mut HitMap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let status_color = match status {
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::InProgress => Color::Yellow,
    };
    let status = Paragraph::new(status_line(app.game()))
        .style(Style::default().fg(status_color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[0]);

    render_move_list(f, chunks[1], app, hits);

    let order = if app.game().move_order().is_ascending() {
        "ascending"
    } else {
        "descending"
    };
    let button = Paragraph::new(format!("Change order ({})", order))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[2]);
    hits.push(chunks[2], Action::ToggleOrder);
}
