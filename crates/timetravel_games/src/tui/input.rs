//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use timetravel_tictactoe::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// A user intent, produced by a key press or a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Click the cell at a board index.
    ClickCell(usize),
    /// Click the cell under the board cursor.
    PlaceAtCursor,
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Select the row above in the move list.
    SelectPrevRow,
    /// Select the row below in the move list.
    SelectNextRow,
    /// Jump to the selected move-list row.
    JumpToSelected,
    /// Jump to a history step.
    JumpTo(usize),
    /// Jump one step back.
    StepBack,
    /// Jump one step forward.
    StepForward,
    /// Jump to the game start.
    JumpStart,
    /// Jump to the latest entry.
    JumpLatest,
    /// Flip the move list order.
    ToggleOrder,
    /// Move focus between board and move list.
    SwitchFocus,
    /// Discard history and start over.
    NewGame,
    /// Leave the application.
    Quit,
}

/// Maps a key press to an action for the focused panel.
pub fn key_action(key: KeyCode, focus: Focus) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchFocus),
        KeyCode::Char('o') => Some(Action::ToggleOrder),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpStart),
        KeyCode::End => Some(Action::JumpLatest),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::ClickCell(digit as usize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(match focus {
            Focus::Board => Action::PlaceAtCursor,
            Focus::Moves => Action::JumpToSelected,
        }),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => match (focus, key) {
            (Focus::Board, _) => Some(Action::MoveCursor(key)),
            (Focus::Moves, KeyCode::Up) => Some(Action::SelectPrevRow),
            (Focus::Moves, KeyCode::Down) => Some(Action::SelectNextRow),
            (Focus::Moves, _) => None,
        },
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    use Position::*;

    match (cursor, key) {
        // Right movement
        (TopLeft, KeyCode::Right) => TopCenter,
        (TopCenter, KeyCode::Right) => TopRight,
        (MiddleLeft, KeyCode::Right) => Center,
        (Center, KeyCode::Right) => MiddleRight,
        (BottomLeft, KeyCode::Right) => BottomCenter,
        (BottomCenter, KeyCode::Right) => BottomRight,

        // Left movement
        (TopCenter, KeyCode::Left) => TopLeft,
        (TopRight, KeyCode::Left) => TopCenter,
        (Center, KeyCode::Left) => MiddleLeft,
        (MiddleRight, KeyCode::Left) => Center,
        (BottomCenter, KeyCode::Left) => BottomLeft,
        (BottomRight, KeyCode::Left) => BottomCenter,

        // Down movement
        (TopLeft, KeyCode::Down) => MiddleLeft,
        (TopCenter, KeyCode::Down) => Center,
        (TopRight, KeyCode::Down) => MiddleRight,
        (MiddleLeft, KeyCode::Down) => BottomLeft,
        (Center, KeyCode::Down) => BottomCenter,
        (MiddleRight, KeyCode::Down) => BottomRight,

        // Up movement
        (MiddleLeft, KeyCode::Up) => TopLeft,
        (Center, KeyCode::Up) => TopCenter,
        (MiddleRight, KeyCode::Up) => TopRight,
        (BottomLeft, KeyCode::Up) => MiddleLeft,
        (BottomCenter, KeyCode::Up) => Center,
        (BottomRight, KeyCode::Up) => MiddleRight,

        // Edges stay put
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(key_action(KeyCode::Char('1'), Focus::Board), Some(Action::ClickCell(0)));
        assert_eq!(key_action(KeyCode::Char('9'), Focus::Moves), Some(Action::ClickCell(8)));
        assert_eq!(key_action(KeyCode::Char('0'), Focus::Board), None);
    }

    #[test]
    fn test_enter_depends_on_focus() {
        assert_eq!(key_action(KeyCode::Enter, Focus::Board), Some(Action::PlaceAtCursor));
        assert_eq!(key_action(KeyCode::Enter, Focus::Moves), Some(Action::JumpToSelected));
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            key_action(KeyCode::Up, Focus::Board),
            Some(Action::MoveCursor(KeyCode::Up))
        );
        assert_eq!(key_action(KeyCode::Up, Focus::Moves), Some(Action::SelectPrevRow));
        assert_eq!(key_action(KeyCode::Left, Focus::Moves), None);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }
}
