//! Error and outcome types for session operations.

use super::position::Position;
use super::types::Mark;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Errors returned by [`GameSession`](crate::GameSession) operations.
///
/// These indicate a caller bug (for example a stale move list referencing
/// pruned history) and are never swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// A move index outside the current history.
    #[display("Move #{requested} is outside history of length {len}")]
    MoveOutOfRange {
        /// The requested move index.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A cell index outside 0-8.
    #[display("Cell index {_0} is outside the board (must be 0-8)")]
    CellOutOfRange(#[error(not(source))] usize),
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum IllegalMove {
    /// The square already holds a mark.
    #[display("Square {_0} is already occupied")]
    CellOccupied(Position),

    /// The displayed position already has a winner.
    #[display("Game is already won by {_0}")]
    GameOver(Mark),
}

/// Result of [`GameSession::play`](crate::GameSession::play).
///
/// An ignored move leaves the session untouched; the reason is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The mark was placed and the cursor advanced.
    Placed {
        /// Mark that was placed.
        mark: Mark,
        /// Square it was placed on.
        position: Position,
        /// Number of future snapshots dropped by the move.
        discarded: usize,
    },
    /// Nothing changed.
    Ignored(IllegalMove),
}

impl PlayOutcome {
    /// Checks if the move was applied.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed { .. })
    }
}
