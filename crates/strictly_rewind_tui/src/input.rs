//! Selector movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_rewind::Position;

/// Moves the board selector with the arrow keys, stopping at the edges.
pub fn move_selector(selector: Position, key: KeyCode) -> Position {
    let (row, col) = (selector.row(), selector.col());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_row_col(row, col).unwrap_or(selector)
}

/// Maps keys `1`-`9` to board positions.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1)),
        _ => None,
    }
}
