//! Location invariant: stored move locations match the board diff.

use super::super::rules::determine_move_location;
use super::super::GameSession;
use super::Invariant;

/// Invariant: for every entry after the first, the stored location equals
/// the diff between its board and the previous one.
pub struct LocationConsistentInvariant;

impl Invariant<GameSession> for LocationConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history.windows(2).all(|pair| {
            *pair[1].location() == determine_move_location(pair[0].board(), pair[1].board())
        })
    }

    fn description() -> &'static str {
        "Stored move locations match the board diff"
    }
}
