//! Contract-based validation for session actions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions decide whether an action is legal and are
//! always checked. Postconditions re-verify the session after an accepted
//! action and only run in debug builds.

use super::action::IllegalMove;
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::rules;
use super::session::GameSession;
use super::Position;
use tracing::{error, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for one kind of state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), IllegalMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the displayed board has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`IllegalMove::GameOver`] once a line is complete.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), IllegalMove> {
        match rules::determine_winner(session.current_board()) {
            Some(_) => Err(IllegalMove::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: the target square is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`IllegalMove::CellOccupied`] if `pos` is taken.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &GameSession) -> Result<(), IllegalMove> {
        if session.current_board().is_empty(pos) {
            Ok(())
        } else {
            Err(IllegalMove::CellOccupied(pos))
        }
    }
}

/// Precondition: the history index exists.
pub struct IndexInRange;

impl IndexInRange {
    /// Fails with [`IllegalMove::IndexOutOfRange`] past the end of history.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &GameSession) -> Result<(), IllegalMove> {
        let len = session.history().len();
        if index < len {
            Ok(())
        } else {
            Err(IllegalMove::IndexOutOfRange { index, len })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play contract
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions, in order:
/// - no winner on the displayed board
/// - target square is empty
///
/// Postconditions:
/// - entries up to the old cursor are kept unchanged
/// - exactly one entry follows them and the cursor points at it
/// - all session invariants hold
pub struct PlayContract;

impl Contract<GameSession, Position> for PlayContract {
    fn pre(session: &GameSession, pos: &Position) -> Result<(), IllegalMove> {
        GameNotOver::check(session)?;
        CellIsEmpty::check(*pos, session)?;
        Ok(())
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        let kept = before.current_index() + 1;

        if after.history().len() != kept + 1 || after.current_index() != kept {
            violations.push(InvariantViolation::new(
                "Play appends exactly one entry after the cursor",
            ));
        }
        if after.history().get(..kept) != before.history().get(..kept) {
            violations.push(InvariantViolation::new(
                "Play keeps history up to the cursor",
            ));
        }
        if let Err(found) = SessionInvariants::check_all(after) {
            violations.extend(found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump contract
// ─────────────────────────────────────────────────────────────

/// Contract for time travel.
///
/// Precondition: the index exists. Postcondition: history is untouched.
pub struct JumpContract;

impl Contract<GameSession, usize> for JumpContract {
    fn pre(session: &GameSession, index: &usize) -> Result<(), IllegalMove> {
        IndexInRange::check(*index, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if before.history() != after.history() {
            violations.push(InvariantViolation::new("Jump leaves history unchanged"));
        }
        if let Err(found) = SessionInvariants::check_all(after) {
            violations.extend(found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Checks a contract's postcondition, panicking in debug builds on failure.
#[instrument(skip_all)]
pub fn assert_post<C, A>(before: &GameSession, after: &GameSession)
where
    C: Contract<GameSession, A>,
{
    if let Err(violations) = C::post(before, after) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(violations = %descriptions, "Postcondition failed");
        debug_assert!(false, "Postcondition failed: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::history::HistoryEntry;
    use crate::games::tictactoe::{Board, Player};

    #[test]
    fn test_precondition_empty_square() {
        let session = GameSession::new();
        assert!(PlayContract::pre(&session, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let session = GameSession::replay(&[Position::Center]).unwrap();
        assert_eq!(
            PlayContract::pre(&session, &Position::Center),
            Err(IllegalMove::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        // X: 0,1,2  O: 3,4
        let session = GameSession::replay(&[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        // occupied and game over: game over wins
        assert_eq!(
            PlayContract::pre(&session, &Position::TopLeft),
            Err(IllegalMove::GameOver)
        );
        assert_eq!(
            PlayContract::pre(&session, &Position::BottomRight),
            Err(IllegalMove::GameOver)
        );
    }

    #[test]
    fn test_jump_precondition() {
        let session = GameSession::replay(&[Position::Center]).unwrap();
        assert!(JumpContract::pre(&session, &1).is_ok());
        assert_eq!(
            JumpContract::pre(&session, &2),
            Err(IllegalMove::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_play_postcondition_holds() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.play_move(Position::Center).unwrap();
        assert!(PlayContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_play_postcondition_detects_skipped_append() {
        let before = GameSession::new();
        let after = before.clone();
        assert!(PlayContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_jump_postcondition_detects_history_change() {
        let before = GameSession::replay(&[Position::Center]).unwrap();
        let mut after = before.clone();
        after.history.push(HistoryEntry::new(
            Board::new().with_mark(Position::Center, Player::X),
            None,
        ));
        assert!(JumpContract::post(&before, &after).is_err());
    }
}
