//! Derived move list and status line.
//!
//! Both are computed from a [`TimeTravelGame`] on every render and never
//! stored.

use crate::{GameStatus, MoveLocation, TimeTravelGame};
use derive_getters::Getters;
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveListItem {
    /// History step this row jumps to.
    step: usize,
    /// Button label.
    label: String,
    /// Where the move was played; absent for the game start.
    location: Option<MoveLocation>,
    /// Whether this step is the displayed one.
    active: bool,
}

/// Builds the move list label for a history step.
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Builds the move list in display order.
///
/// The underlying history is not reordered; descending order only reverses
/// the returned rows.
#[instrument(skip(game), fields(len = game.history().len(), order = ?game.move_order()))]
pub fn move_list(game: &TimeTravelGame) -> Vec<MoveListItem> {
    let mut items: Vec<MoveListItem> = game
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveListItem {
            step,
            label: move_label(step),
            location: entry.location(),
            active: step == game.step(),
        })
        .collect();

    if !game.move_order().is_ascending() {
        items.reverse();
    }
    items
}

/// Derives the status line for the displayed board.
#[instrument(skip(game), fields(step = game.step()))]
pub fn status_line(game: &TimeTravelGame) -> String {
    match game.status() {
        GameStatus::Won(line) => format!("Winner: {}", line.player()),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => format!("Next player: {}", game.next_player()),
    }
}
