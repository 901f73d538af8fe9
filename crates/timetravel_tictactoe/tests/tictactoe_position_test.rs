//! Tests for board positions and move locations.

use timetravel_tictactoe::{MoveLocation, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_locations_are_one_based_row_major() {
    for (index, pos) in Position::ALL.into_iter().enumerate() {
        let location = pos.location();
        assert_eq!(*location.row() as usize, 1 + index / 3, "row of {index}");
        assert_eq!(*location.column() as usize, 1 + index % 3, "column of {index}");
    }
}

#[test]
fn test_location_display() {
    assert_eq!(Position::MiddleRight.location(), MoveLocation::new(2, 3));
    assert_eq!(Position::MiddleRight.location().to_string(), "(2, 3)");
}

#[test]
fn test_all_positions_in_index_order() {
    assert_eq!(Position::ALL.len(), 9);
    for (index, pos) in Position::ALL.into_iter().enumerate() {
        assert_eq!(pos.to_index(), index);
        assert_eq!(Position::from_index(index), Some(pos));
    }
}
