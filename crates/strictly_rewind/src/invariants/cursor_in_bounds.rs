//! Cursor bounds invariant: the cursor always points at a stored snapshot.

use super::super::GameSession;
use super::Invariant;

/// Invariant: history is non-empty and `cursor < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameSession> for CursorInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.cursor() < session.history().len()
    }

    fn description() -> &'static str {
        "Cursor points inside a non-empty history"
    }
}
