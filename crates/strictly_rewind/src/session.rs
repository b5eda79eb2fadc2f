//! Time-travelling game session.
//!
//! A [`GameSession`] owns the ordered history of board snapshots and a cursor
//! into it. Turn, status and winner are never stored: they are derived from
//! the cursor and the snapshot under it every time they are read.
//!
//! The one state transition that changes history is truncate-then-append:
//! playing a move while the cursor points into the past first drops every
//! snapshot after the cursor, then appends the new one. The dropped branch
//! is gone for good.

use super::error::{IllegalMove, PlayOutcome, SessionError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::moves::{MoveDescriptor, SortOrder};
use super::position::Position;
use super::rules::{self, WinResult};
use super::types::{BoardSnapshot, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Snapshot index at which every square is filled.
const FULL_BOARD_MOVE: usize = 9;

/// Status line for the displayed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line is complete.
    #[display("Winner: {_0}")]
    Winner(Mark),
    /// All nine squares filled with no line.
    #[display("Result is a draw")]
    Draw,
    /// The game continues with this player.
    #[display("Next Player: {_0}")]
    NextPlayer(Mark),
}

impl GameStatus {
    /// Checks if no further moves are possible from this position.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::NextPlayer(_))
    }
}

/// A tic-tac-toe game with navigable history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    history: Vec<BoardSnapshot>,
    cursor: usize,
}

impl GameSession {
    /// Creates a session holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            history: vec![BoardSnapshot::new()],
            cursor: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived reads
    // ─────────────────────────────────────────────────────────────

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[BoardSnapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots (moves + 1).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: a session holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Checks if the cursor is on the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor + 1 == self.history.len()
    }

    /// Player who places the next mark: X on even cursor, O on odd.
    pub fn turn_owner(&self) -> Mark {
        if self.cursor % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// The displayed snapshot.
    pub fn current_snapshot(&self) -> &BoardSnapshot {
        &self.history[self.cursor]
    }

    /// Completed line on the displayed snapshot, if any.
    pub fn win_result(&self) -> Option<WinResult> {
        rules::detect(self.current_snapshot())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = self.win_result() {
            GameStatus::Winner(*win.winner())
        } else if self.cursor == FULL_BOARD_MOVE {
            debug_assert!(
                self.current_snapshot().is_full(),
                "draw reported on a board with empty squares"
            );
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.turn_owner())
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Places the turn owner's mark on `position`.
    ///
    /// Ignored, with history and cursor untouched, when the square is taken
    /// or the displayed position already has a winner. Otherwise history is
    /// truncated to `cursor + 1` entries, the new snapshot is appended and
    /// the cursor moves onto it.
    #[instrument(skip(self), fields(cursor = self.cursor, len = self.history.len()))]
    pub fn play(&mut self, position: Position) -> PlayOutcome {
        let current = *self.current_snapshot();

        if let Some(win) = rules::detect(&current) {
            let reason = IllegalMove::GameOver(*win.winner());
            debug!(%reason, "Ignoring move");
            return PlayOutcome::Ignored(reason);
        }

        if !current.is_empty_at(position) {
            let reason = IllegalMove::CellOccupied(position);
            debug!(%reason, "Ignoring move");
            return PlayOutcome::Ignored(reason);
        }

        let mark = self.turn_owner();
        let next = current.with_mark(position, mark);

        let discarded = self.history.len() - (self.cursor + 1);
        if discarded > 0 {
            info!(discarded, "Discarding future history");
        }
        self.history.truncate(self.cursor + 1);
        self.history.push(next);
        self.cursor = self.history.len() - 1;

        debug_assert!(
            SessionInvariants::check_all(self).is_ok(),
            "session invariants violated after play"
        );

        info!(%mark, ?position, status = %self.status(), "Move placed");
        PlayOutcome::Placed {
            mark,
            position,
            discarded,
        }
    }

    /// Plays on a raw cell index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CellOutOfRange`] if `index > 8`.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<PlayOutcome, SessionError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            SessionError::CellOutOfRange(index)
        })?;
        Ok(self.play(position))
    }

    /// Moves the cursor to `move_index` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MoveOutOfRange`] if `move_index` is not a
    /// recorded snapshot.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), SessionError> {
        self.check_move_index(move_index)?;
        debug!(from = self.cursor, to = move_index, "Jumping");
        self.cursor = move_index;
        Ok(())
    }

    /// Describes history entry `move_index` for the move list.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MoveOutOfRange`] if `move_index` is not a
    /// recorded snapshot.
    pub fn move_descriptor(&self, move_index: usize) -> Result<MoveDescriptor, SessionError> {
        self.check_move_index(move_index)?;
        Ok(self.describe(move_index))
    }

    /// Describes every history entry in the given order.
    #[instrument(skip(self))]
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveDescriptor> {
        let indices = 0..self.history.len();
        match order {
            SortOrder::Ascending => indices.map(|i| self.describe(i)).collect(),
            SortOrder::Descending => indices.rev().map(|i| self.describe(i)).collect(),
        }
    }

    fn describe(&self, move_index: usize) -> MoveDescriptor {
        let target = match move_index {
            0 => None,
            i => self.history[i].changed_position(&self.history[i - 1]),
        };
        MoveDescriptor::new(move_index, target, move_index == self.cursor)
    }

    fn check_move_index(&self, move_index: usize) -> Result<(), SessionError> {
        if move_index < self.history.len() {
            Ok(())
        } else {
            let err = SessionError::MoveOutOfRange {
                requested: move_index,
                len: self.history.len(),
            };
            warn!(%err, "Rejected move index");
            Err(err)
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.len(), 1);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.turn_owner(), Mark::X);
        assert_eq!(session.status(), GameStatus::NextPlayer(Mark::X));
        assert_eq!(session.status().to_string(), "Next Player: X");
        assert!(session.win_result().is_none());
    }

    #[test]
    fn test_play_appends_and_flips_turn() {
        let mut session = GameSession::new();
        let outcome = session.play(Position::Center);

        assert_eq!(
            outcome,
            PlayOutcome::Placed {
                mark: Mark::X,
                position: Position::Center,
                discarded: 0
            }
        );
        assert_eq!(session.len(), 2);
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.turn_owner(), Mark::O);
    }

    #[test]
    fn test_play_occupied_is_ignored() {
        let mut session = GameSession::new();
        session.play(Position::Center);
        let before = session.clone();

        let outcome = session.play(Position::Center);

        assert_eq!(
            outcome,
            PlayOutcome::Ignored(IllegalMove::CellOccupied(Position::Center))
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut session = GameSession::new();
        assert_eq!(
            session.jump_to(1),
            Err(SessionError::MoveOutOfRange { requested: 1, len: 1 })
        );
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_play_index_out_of_range() {
        let mut session = GameSession::new();
        assert_eq!(session.play_index(9), Err(SessionError::CellOutOfRange(9)));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_branching_reports_discarded() {
        let mut session = GameSession::new();
        session.play(Position::TopLeft);
        session.play(Position::Center);
        session.play(Position::TopRight);
        session.jump_to(1).expect("move 1 exists");

        let outcome = session.play(Position::BottomRight);

        assert_eq!(
            outcome,
            PlayOutcome::Placed {
                mark: Mark::O,
                position: Position::BottomRight,
                discarded: 2
            }
        );
        assert_eq!(session.len(), 3);
        assert!(session.is_at_latest());
    }
}
