//! Single-step invariant: each history entry adds exactly one mark.

use super::super::{GameSession, Player, Square};
use super::Invariant;

/// Invariant: consecutive boards differ in exactly one square.
///
/// That square goes from Empty to a mark, and the marks alternate
/// X, O, X, ... starting with X at entry 1. Once placed, a mark is never
/// overwritten or removed.
pub struct SingleStepInvariant;

impl Invariant<GameSession> for SingleStepInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let expected = Player::for_index(step);
                let before = pair[0].board().squares();
                let after = pair[1].board().squares();

                let mut changed = before.iter().zip(after.iter()).filter(|(a, b)| a != b);
                match (changed.next(), changed.next()) {
                    (Some((Square::Empty, Square::Occupied(player))), None) => *player == expected,
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each move fills exactly one empty square with the alternating mark"
    }
}
