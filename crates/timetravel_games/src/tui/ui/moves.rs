//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use timetravel_tictactoe::move_list;

use super::HitMap;
use crate::tui::app::App;
use crate::tui::input::{Action, Focus};

/// Renders the move list in the game's display order.
///
/// The displayed step is marked; when the list has focus the selected row is
/// highlighted too. Each visible row is registered in `hits` as a jump to its
/// step.
pub fn render_move_list(f: &mut Frame, area: Rect, app: &App, hits: &mut HitMap) {
    let rows = move_list(app.game());
    let focused = app.focus() == Focus::Moves;

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let marker = if *row.active() { "> " } else { "  " };
            let label_style = if *row.active() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let mut spans = vec![
                Span::styled(marker, label_style),
                Span::styled(row.label().clone(), label_style),
            ];
            if let Some(location) = row.location() {
                spans.push(Span::styled(
                    format!(" {}", location),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let highlight = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let title = if focused { "History (focused)" } else { "History" };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(highlight);

    let selected_step = if focused {
        app.selected_step()
    } else {
        app.game().step()
    };
    let selected_row = rows.iter().position(|row| *row.step() == selected_step);
    let mut state = ListState::default().with_selected(selected_row);

    let inner = Block::default().borders(Borders::ALL).inner(area);
    f.render_stateful_widget(list, area, &mut state);

    for (line, row) in rows.iter().skip(state.offset()).enumerate() {
        let Ok(line) = u16::try_from(line) else {
            break;
        };
        if line >= inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, inner.y + line, inner.width, 1);
        hits.push(row_area, Action::JumpTo(*row.step()));
    }
}
