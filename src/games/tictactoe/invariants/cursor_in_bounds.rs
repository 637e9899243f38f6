//! Cursor invariant: the history cursor names an existing entry.

use super::super::GameSession;
use super::Invariant;

/// Invariant: `0 <= current < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameSession> for CursorInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.current < session.history.len()
    }

    fn description() -> &'static str {
        "History cursor points at an existing entry"
    }
}
