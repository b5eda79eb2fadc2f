//! Win detection logic for tic-tac-toe.

use super::super::{BoardSnapshot, Cell, Mark, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// The 8 winning lines, in the order they are checked.
///
/// When several lines are complete at once the earliest one listed here is
/// reported. That cannot happen in alternating play but keeps detection
/// deterministic for arbitrary snapshots.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who completed it and which squares it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinResult {
    /// The mark that fills the line.
    winner: Mark,
    /// The three squares of the line, for highlighting.
    line: [Position; 3],
}

impl WinResult {
    /// Checks if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks the board for three equal, non-empty cells on a line.
///
/// Returns the first matching line in [`WINNING_LINES`] order, or `None`.
#[instrument(skip(board))]
pub fn detect(board: &BoardSnapshot) -> Option<WinResult> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if let Cell::Occupied(winner) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            trace!(?winner, ?line, "Winning line found");
            return Some(WinResult { winner, line });
        }
    }

    None
}
