//! Rendering tests against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use timetravel_games::{Action, App, HitMap, draw};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 30;

fn render_buffer(app: &App) -> (Buffer, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    let mut hits = HitMap::default();
    terminal.draw(|f| hits = draw(f, app)).expect("draw");
    (terminal.backend().buffer().clone(), hits)
}

fn render(app: &App) -> (String, HitMap) {
    let (buffer, hits) = render_buffer(app);
    (buffer_text(&buffer), hits)
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn app_after(clicks: &[usize]) -> App {
    let mut app = App::default();
    for &index in clicks {
        app.apply(Action::ClickCell(index));
    }
    app
}

/// Reads `len` symbols starting at (`x`, `y`).
fn row_text(buffer: &Buffer, x: u16, y: u16, len: u16) -> String {
    (x..x + len).map(|column| buffer[(column, y)].symbol()).collect()
}

/// Finds the screen cell registered for `action`.
fn locate(hits: &HitMap, action: Action) -> (u16, u16) {
    (0..HEIGHT)
        .flat_map(|row| (0..WIDTH).map(move |column| (column, row)))
        .find(|&(column, row)| hits.action_at(column, row) == Some(action))
        .expect("action has a hit region")
}

#[test]
fn test_initial_screen() {
    let (text, hits) = render(&App::default());
    assert!(text.contains("Time Travel Tic-Tac-Toe"));
    assert!(text.contains("Next player: X"));
    assert!(text.contains("Go to game start"));
    assert!(text.contains("Change order (ascending)"));

    // 9 cells, 1 history row, 1 order button.
    assert_eq!(hits.regions().len(), 11);
}

#[test]
fn test_winner_and_moves_shown() {
    let (text, _) = render(&app_after(&[0, 4, 1, 5, 2]));
    assert!(text.contains("Winner: X"));
    assert!(text.contains("Go to move #5 (1, 3)"));
    assert!(text.contains("Go to move #2 (2, 2)"));
}

#[test]
fn test_every_cell_clickable() {
    let (_, hits) = render(&App::default());
    for index in 0..9 {
        locate(&hits, Action::ClickCell(index));
    }
}

#[test]
fn test_click_on_cell_region_places_mark() {
    let mut app = App::default();
    let (_, hits) = render(&app);
    let (column, row) = locate(&hits, Action::ClickCell(4));

    let action = hits.action_at(column, row).expect("cell region");
    app.apply(action);
    assert_eq!(app.game().step(), 1);

    let (text, _) = render(&app);
    assert!(text.contains("Next player: O"));
    assert!(text.contains("Go to move #1 (2, 2)"));
}

#[test]
fn test_history_rows_follow_order() {
    let mut app = app_after(&[0, 4, 8]);
    let (_, hits) = render(&app);
    let (_, first_row) = locate(&hits, Action::JumpTo(0));
    let (_, last_row) = locate(&hits, Action::JumpTo(3));
    assert!(first_row < last_row);

    app.apply(Action::ToggleOrder);
    let (text, hits) = render(&app);
    assert!(text.contains("Change order (descending)"));
    let (_, first_row) = locate(&hits, Action::JumpTo(0));
    let (_, last_row) = locate(&hits, Action::JumpTo(3));
    assert!(first_row > last_row);
}

#[test]
fn test_click_history_row_jumps() {
    let mut app = app_after(&[0, 4, 8]);
    let (_, hits) = render(&app);
    let (column, row) = locate(&hits, Action::JumpTo(1));

    app.apply(hits.action_at(column, row).expect("history row"));
    assert_eq!(app.game().step(), 1);
    assert_eq!(app.game().history().len(), 4);

    let (text, _) = render(&app);
    assert!(text.contains("Next player: O"));
}

#[test]
fn test_click_outside_regions_is_ignored() {
    let (_, hits) = render(&App::default());
    assert_eq!(hits.action_at(0, 0), None);
    assert_eq!(hits.action_at(WIDTH - 1, HEIGHT - 1), None);
}

#[test]
fn test_winning_cells_highlighted() {
    let (buffer, hits) = render_buffer(&app_after(&[0, 4, 1, 5, 2]));
    for index in 0..9 {
        let (column, row) = locate(&hits, Action::ClickCell(index));
        let bg = buffer[(column, row)].bg;
        if index < 3 {
            assert_eq!(bg, Color::Green, "cell {index} is on the winning line");
        } else {
            assert_ne!(bg, Color::Green, "cell {index} is not on the winning line");
        }
    }
}

#[test]
fn test_no_highlight_without_winner() {
    let (buffer, hits) = render_buffer(&app_after(&[0, 4, 1]));
    for index in 0..9 {
        let (column, row) = locate(&hits, Action::ClickCell(index));
        assert_ne!(buffer[(column, row)].bg, Color::Green, "cell {index}");
    }
}

#[test]
fn test_active_row_marked_after_jump() {
    let mut app = app_after(&[0, 4, 8]);
    app.apply(Action::JumpTo(1));

    let (buffer, hits) = render_buffer(&app);
    for step in 0..4 {
        let (column, row) = locate(&hits, Action::JumpTo(step));
        let text = row_text(&buffer, column, row, 16);
        if step == 1 {
            assert!(text.starts_with("> Go to move #1"), "active row: {text:?}");
        } else {
            assert!(text.starts_with("  Go to"), "row {step}: {text:?}");
        }
    }
}
