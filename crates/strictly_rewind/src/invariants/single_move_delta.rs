//! Single move delta invariant: each history step places exactly one mark.

use super::super::{BoardSnapshot, Cell, GameSession, Mark, Position};
use super::Invariant;

/// Invariant: `history[i]` differs from `history[i - 1]` in exactly one cell.
///
/// That cell goes from empty to the mark whose turn it was at `i - 1`
/// (X on odd `i`, O on even `i`).
pub struct SingleMoveDeltaInvariant;

impl SingleMoveDeltaInvariant {
    /// Checks one step of history.
    pub fn step_holds(move_index: usize, previous: &BoardSnapshot, next: &BoardSnapshot) -> bool {
        let expected = if move_index % 2 == 1 { Mark::X } else { Mark::O };
        let mut changed = Position::ALL
            .into_iter()
            .filter(|pos| previous.get(*pos) != next.get(*pos));

        match (changed.next(), changed.next()) {
            (Some(pos), None) => {
                previous.get(pos) == Cell::Empty && next.get(pos) == Cell::Occupied(expected)
            }
            _ => false,
        }
    }
}

impl Invariant<GameSession> for SingleMoveDeltaInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| Self::step_holds(i + 1, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each move places exactly one mark for the player whose turn it was"
    }
}
