//! Rooted history invariant: history starts at the empty board.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: history is non-empty and entry 0 is the empty board with no
/// move location.
pub struct RootedHistoryInvariant;

impl Invariant<GameSession> for RootedHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history
            .first()
            .is_some_and(|root| *root.board() == Board::new() && root.location().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board and no move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_new_session_holds() {
        assert!(RootedHistoryInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_truncated_to_root_holds() {
        let mut session = GameSession::replay(&[Position::Center]).unwrap();
        session.jump_to(0).unwrap();
        session.play_move(Position::TopLeft).unwrap();
        assert!(RootedHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        assert!(!RootedHistoryInvariant::holds(&session));
    }
}
