//! Empty start invariant.

use super::super::GameSession;
use super::Invariant;

/// Invariant: the first snapshot in history is an empty board.
pub struct EmptyStartInvariant;

impl Invariant<GameSession> for EmptyStartInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history()
            .first()
            .is_some_and(|board| board.occupied() == 0)
    }

    fn description() -> &'static str {
        "History starts with an empty board"
    }
}
